// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-rectangle accumulation for incremental repaint.

use crate::types::Bounds;

/// The minimal region known to need redrawing: the union of everything
/// invalidated since the last [`DirtyRect::clear`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirtyRect {
    region: Option<Bounds>,
}

impl DirtyRect {
    /// An empty dirty region.
    pub const fn new() -> Self {
        Self { region: None }
    }

    /// True if nothing needs redrawing.
    pub const fn is_empty(&self) -> bool {
        self.region.is_none()
    }

    /// The current region, if any.
    pub const fn region(&self) -> Option<Bounds> {
        self.region
    }

    /// Grow the region to cover `bounds`. Empty bounds are ignored.
    pub fn add(&mut self, bounds: Bounds) {
        if bounds.is_empty() {
            return;
        }
        self.region = Some(match self.region {
            Some(r) => r.union(&bounds),
            None => bounds,
        });
    }

    /// Grow the region to cover the given edges.
    pub fn add_edges(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.add(Bounds::from_edges(left, top, right, bottom));
    }

    /// Take the region, leaving this empty.
    pub fn take(&mut self) -> Option<Bounds> {
        self.region.take()
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.region = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_union() {
        let mut d = DirtyRect::new();
        assert!(d.is_empty());
        d.add(Bounds::new(0, 0, 10, 10));
        d.add_edges(20, 20, 30, 30);
        assert_eq!(d.region(), Some(Bounds::from_edges(0, 0, 30, 30)));
        d.clear();
        assert!(d.is_empty());
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut d = DirtyRect::new();
        d.add(Bounds::new(5, 5, 0, 10));
        assert!(d.is_empty(), "zero-width bounds carry no damage");
        d.add(Bounds::new(5, 5, 1, 1));
        assert_eq!(d.take(), Some(Bounds::new(5, 5, 1, 1)));
        assert!(d.is_empty());
    }
}
