// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing with optional proximity correction.
//!
//! A touch is resolved against the candidates of the neighbour-grid cell it falls in,
//! never against the whole pad. The result is the key the touch is inside, or failing
//! that (with proximity correction on) the closest key within the proximity threshold.
//!
//! Alongside the primary key, [`HitTester::locate_with_candidates`] ranks the codes of
//! every qualifying key by squared distance into a fixed-capacity [`Candidates`] list.

use crate::codes::PRINTABLE_THRESHOLD;
use crate::keyboard::Keyboard;

/// Capacity of a [`Candidates`] list.
pub const MAX_NEARBY_KEYS: usize = 12;

/// Codes of keys near a touch, nearest first.
///
/// Insertion shifts farther entries toward the end; whatever no longer fits is
/// dropped, so the list never grows past [`MAX_NEARBY_KEYS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidates {
    codes: [i32; MAX_NEARBY_KEYS],
    distances: [i32; MAX_NEARBY_KEYS],
    len: usize,
}

impl Default for Candidates {
    fn default() -> Self {
        Self::new()
    }
}

impl Candidates {
    /// An empty list.
    pub const fn new() -> Self {
        Self {
            codes: [0; MAX_NEARBY_KEYS],
            distances: [i32::MAX; MAX_NEARBY_KEYS],
            len: 0,
        }
    }

    /// Insert all of a key's codes at squared distance `dist`.
    ///
    /// Codes go before the first entry that is strictly farther, so equal distances
    /// keep insertion order.
    pub fn insert(&mut self, codes: &[i32], dist: i32) {
        let at = self.distances[..self.len]
            .iter()
            .position(|&d| d > dist)
            .unwrap_or(self.len);
        if at >= MAX_NEARBY_KEYS {
            return;
        }
        let n = codes.len().min(MAX_NEARBY_KEYS - at);
        self.codes.copy_within(at..MAX_NEARBY_KEYS - n, at + n);
        self.distances.copy_within(at..MAX_NEARBY_KEYS - n, at + n);
        self.codes[at..at + n].copy_from_slice(&codes[..n]);
        self.distances[at..at + n].fill(dist);
        self.len = (self.len + n).min(MAX_NEARBY_KEYS);
    }

    /// The ranked codes.
    pub fn as_slice(&self) -> &[i32] {
        &self.codes[..self.len]
    }

    /// Squared distances parallel to [`as_slice`](Self::as_slice).
    pub fn distances(&self) -> &[i32] {
        &self.distances[..self.len]
    }

    /// Number of ranked codes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no key qualified.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Resolves touch points to key indices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HitTester {
    proximity_correction: bool,
}

impl HitTester {
    /// A tester with proximity correction off.
    pub const fn new() -> Self {
        Self {
            proximity_correction: false,
        }
    }

    /// Whether near misses count as hits.
    pub const fn proximity_correction(&self) -> bool {
        self.proximity_correction
    }

    /// Turn proximity correction on or off.
    pub fn set_proximity_correction(&mut self, enabled: bool) {
        self.proximity_correction = enabled;
    }

    /// The key at `(x, y)` in keyboard coordinates, if any.
    pub fn locate(&self, keyboard: &mut Keyboard, x: i32, y: i32) -> Option<usize> {
        self.scan(keyboard, x, y, None)
    }

    /// The key at `(x, y)` plus the ranked codes of every nearby key.
    pub fn locate_with_candidates(
        &self,
        keyboard: &mut Keyboard,
        x: i32,
        y: i32,
    ) -> (Option<usize>, Candidates) {
        let mut out = Candidates::new();
        let primary = self.scan(keyboard, x, y, Some(&mut out));
        (primary, out)
    }

    fn scan(
        &self,
        keyboard: &mut Keyboard,
        x: i32,
        y: i32,
        mut out: Option<&mut Candidates>,
    ) -> Option<usize> {
        let threshold = keyboard.proximity_threshold();
        let (grid, keys) = keyboard.neighborhood();
        let mut primary = None;
        let mut closest = None;
        let mut closest_dist = threshold.saturating_add(1);
        for &index in grid.candidates(x, y) {
            let Some(key) = keys.get(index) else {
                continue;
            };
            let inside = key.is_inside(x, y);
            let mut dist = 0;
            let near = self.proximity_correction && {
                dist = key.squared_distance_from(x, y);
                dist < threshold
            };
            let printable = key.primary_code().is_some_and(|c| c > PRINTABLE_THRESHOLD);
            if (near || inside) && printable {
                if dist < closest_dist {
                    closest_dist = dist;
                    closest = Some(index);
                }
                if let Some(out) = out.as_deref_mut() {
                    out.insert(&key.codes, dist);
                }
            }
            if inside {
                primary = Some(index);
            }
        }
        primary.or(closest)
    }
}
