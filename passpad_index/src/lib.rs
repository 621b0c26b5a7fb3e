// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passpad Index: integer geometry and spatial bookkeeping for touch keypads.
//!
//! - [`Bounds`]: half-open integer rectangles with centre-distance helpers.
//! - [`NeighborGrid`]: a fixed `columns × rows` cell partition where each cell lists
//!   the entries close enough to matter for proximity hit testing.
//! - [`DirtyRect`]: union-of-invalidations tracking for incremental repaint.
//!
//! It has no dependencies and does not know what a key is; higher layers (like the
//! keyboard layout) feed it bounds and interpret the returned indices.
//!
//! # Example
//!
//! ```rust
//! use passpad_index::{Bounds, DirtyRect, NeighborGrid};
//!
//! // Two 50×50 entries side by side.
//! let entries = [Bounds::new(0, 0, 50, 50), Bounds::new(50, 0, 50, 50)];
//! let grid = NeighborGrid::build(2, 1, 100, 50, 70 * 70, &entries);
//!
//! // A point in the left cell sees both entries as candidates.
//! assert_eq!(grid.candidates(10, 10), &[0, 1]);
//! // Outside the grid there is nothing.
//! assert!(grid.candidates(100, 10).is_empty());
//!
//! let mut dirty = DirtyRect::new();
//! dirty.add(entries[0]);
//! dirty.add(entries[1]);
//! assert_eq!(dirty.region(), Some(Bounds::new(0, 0, 100, 50)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod damage;
pub mod grid;
pub mod types;

pub use damage::DirtyRect;
pub use grid::NeighborGrid;
pub use types::Bounds;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_and_damage_agree_on_bounds() {
        let entries = [Bounds::new(0, 0, 40, 40), Bounds::new(40, 0, 40, 40)];
        let grid = NeighborGrid::build(2, 1, 80, 40, 56 * 56, &entries);
        let mut dirty = DirtyRect::new();
        for &i in grid.candidates(79, 39) {
            dirty.add(entries[i]);
        }
        assert_eq!(dirty.region(), Some(Bounds::new(0, 0, 80, 40)));
    }
}
