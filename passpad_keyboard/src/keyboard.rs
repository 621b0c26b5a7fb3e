// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 3×4 numeric keypad layout engine.

use alloc::string::ToString;
use alloc::vec::Vec;

use passpad_index::{Bounds, NeighborGrid};

use crate::codes::{KEYCODE_CLEAR, KEYCODE_DELETE, digit_code};
use crate::types::{EdgeFlags, Key};

/// Keys per row.
pub const GRID_WIDTH: usize = 3;
/// Rows.
pub const GRID_HEIGHT: usize = 4;
/// Number of keys on the pad.
pub const KEY_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;
/// Index of the reconfigurable accept key (the trailing key).
pub const ACCEPT_KEY_INDEX: usize = KEY_COUNT - 1;

/// Label of the default accept key.
pub const DEFAULT_ACCEPT_LABEL: &str = "Clear";
/// Label of the delete key.
pub const DELETE_LABEL: &str = "DEL";

// Proximity search radius in tenths of a key width.
const SEARCH_DISTANCE_TENTHS: i32 = 14;

#[allow(clippy::cast_possible_truncation, reason = "grid extents are single digits")]
const COLUMNS: i32 = GRID_WIDTH as i32;
#[allow(clippy::cast_possible_truncation, reason = "grid extents are single digits")]
const ROWS: i32 = GRID_HEIGHT as i32;

/// Squared proximity radius for a given key width.
///
/// Saturates at `i32::MAX` for very wide keys.
pub const fn proximity_threshold_for(key_width: i32) -> i32 {
    let radius = key_width.saturating_mul(SEARCH_DISTANCE_TENTHS) / 10;
    radius.saturating_mul(radius)
}

/// An ordered set of [`Key`]s laid out on a fixed grid, plus the neighbour grid
/// used by hit testing.
///
/// Key order is row-major: `1 2 3 / 4 5 6 / 7 8 9 / DEL 0 <accept>`. The four corner
/// keys carry [`EdgeFlags`] for their two outer sides.
///
/// The neighbour grid is built lazily on first query and dropped whenever geometry
/// changes, so it never reflects stale key positions.
#[derive(Clone, Debug)]
pub struct Keyboard {
    keys: Vec<Key>,
    display_width: i32,
    default_width: i32,
    default_height: i32,
    horizontal_gap: i32,
    vertical_gap: i32,
    total_width: i32,
    total_height: i32,
    proximity_threshold: i32,
    grid: Option<NeighborGrid>,
}

impl Keyboard {
    /// Build the pad for a display `display_width` units wide.
    ///
    /// Keys are square with side `display_width / 3`; gaps start at zero.
    pub fn new(display_width: i32) -> Self {
        let side = (display_width / COLUMNS).max(0);
        let mut kb = Self {
            keys: Vec::with_capacity(KEY_COUNT),
            display_width,
            default_width: side,
            default_height: side,
            horizontal_gap: 0,
            vertical_gap: 0,
            total_width: 0,
            total_height: 0,
            proximity_threshold: proximity_threshold_for(side),
            grid: None,
        };
        kb.create_keys();
        kb
    }

    fn create_keys(&mut self) {
        let labels = [
            "1",
            "2",
            "3",
            "4",
            "5",
            "6",
            "7",
            "8",
            "9",
            DELETE_LABEL,
            "0",
            DEFAULT_ACCEPT_LABEL,
        ];
        let codes = [
            digit_code(1),
            digit_code(2),
            digit_code(3),
            digit_code(4),
            digit_code(5),
            digit_code(6),
            digit_code(7),
            digit_code(8),
            digit_code(9),
            KEYCODE_DELETE,
            digit_code(0),
            KEYCODE_CLEAR,
        ];
        self.keys.clear();
        for (i, (label, code)) in labels.into_iter().zip(codes).enumerate() {
            self.keys.push(Key {
                codes: alloc::vec![code],
                label: Some(label.to_string()),
                icon: None,
                bounds: Bounds::default(),
                gap: self.horizontal_gap,
                edge_flags: corner_flags(i),
                repeatable: code == KEYCODE_DELETE,
                pressed: false,
            });
        }
        self.layout(self.default_width, self.default_height);
        self.total_height = self.default_height * ROWS + self.vertical_gap * (ROWS - 1);
    }

    // Row-major placement; each key advances x by its own gap.
    fn layout(&mut self, key_width: i32, key_height: i32) {
        let mut x = 0;
        let mut y = 0;
        self.total_width = 0;
        for (i, key) in self.keys.iter_mut().enumerate() {
            if i > 0 && i % GRID_WIDTH == 0 {
                x = 0;
                y += self.vertical_gap + key_height;
            }
            key.bounds = Bounds::new(x, y, key_width, key_height);
            x += key_width + key.gap;
            self.total_width = self.total_width.max(x);
        }
    }

    /// Fit the keys into `width × height`.
    ///
    /// Non-positive sizes are ignored, as is any size the pad already fits in.
    /// Otherwise every key is resized uniformly, the proximity threshold follows
    /// the new key width, and the neighbour grid is dropped.
    pub fn resize(&mut self, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        if self.total_width <= width && self.total_height <= height {
            return;
        }
        let key_height = height / ROWS - self.vertical_gap;
        let key_width = width / COLUMNS - self.horizontal_gap;
        self.proximity_threshold = proximity_threshold_for(key_width);
        for key in &mut self.keys {
            key.gap = self.horizontal_gap;
        }
        self.layout(key_width, key_height);
        self.total_width = width;
        self.total_height = height;
        self.grid = None;
        log::debug!(
            "resized keypad to {width}x{height}, keys {key_width}x{key_height}, threshold {}",
            self.proximity_threshold
        );
    }

    /// Set the gaps used by the next [`resize`](Self::resize).
    pub fn set_gaps(&mut self, horizontal: i32, vertical: i32) {
        self.horizontal_gap = horizontal;
        self.vertical_gap = vertical;
    }

    /// Gaps as `(horizontal, vertical)`.
    pub fn gaps(&self) -> (i32, i32) {
        (self.horizontal_gap, self.vertical_gap)
    }

    /// Candidate key indices near a point, building the neighbour grid if needed.
    pub fn nearest_keys(&mut self, x: i32, y: i32) -> &[usize] {
        self.neighborhood().0.candidates(x, y)
    }

    /// The neighbour grid (built on demand) alongside the keys it indexes.
    pub fn neighborhood(&mut self) -> (&NeighborGrid, &[Key]) {
        let Self {
            grid,
            keys,
            total_width,
            total_height,
            proximity_threshold,
            ..
        } = self;
        let grid = grid.get_or_insert_with(|| {
            let bounds: Vec<Bounds> = keys.iter().map(|k| k.bounds).collect();
            log::trace!("building neighbour grid for {total_width}x{total_height}");
            NeighborGrid::build(
                GRID_WIDTH,
                GRID_HEIGHT,
                *total_width,
                *total_height,
                *proximity_threshold,
                &bounds,
            )
        });
        (grid, keys)
    }

    /// True if the neighbour grid is currently built.
    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// All keys in layout order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Mutable access to all keys.
    ///
    /// Drops the neighbour grid, since the caller may move keys.
    pub fn keys_mut(&mut self) -> &mut [Key] {
        self.grid = None;
        &mut self.keys
    }

    /// The key at `index`, if any.
    pub fn key(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Mutable key at `index`, if any.
    ///
    /// Drops the neighbour grid, since the caller may move the key.
    pub fn key_mut(&mut self, index: usize) -> Option<&mut Key> {
        self.grid = None;
        self.keys.get_mut(index)
    }

    /// Mark the key at `index` held or released, keeping the neighbour grid.
    ///
    /// Returns `false` if there is no such key.
    pub fn set_pressed(&mut self, index: usize, pressed: bool) -> bool {
        let Some(key) = self.keys.get_mut(index) else {
            return false;
        };
        if pressed {
            key.on_pressed();
        } else {
            key.on_released();
        }
        true
    }

    /// Replace the accept key's label and codes.
    ///
    /// When `codes` is empty and the label is not, the label's first character
    /// becomes the only code.
    pub fn set_accept_key(&mut self, label: &str, codes: &[i32]) {
        let codes: Vec<i32> = if codes.is_empty() {
            label
                .chars()
                .next()
                .and_then(|c| i32::try_from(u32::from(c)).ok())
                .into_iter()
                .collect()
        } else {
            codes.to_vec()
        };
        if let Some(key) = self.keys.get_mut(ACCEPT_KEY_INDEX) {
            key.label = Some(label.to_string());
            key.codes = codes;
        }
    }

    /// The accept key's label and codes.
    pub fn accept_key(&self) -> (Option<&str>, &[i32]) {
        match self.keys.get(ACCEPT_KEY_INDEX) {
            Some(key) => (key.label.as_deref(), &key.codes),
            None => (None, &[]),
        }
    }

    /// The accept key's primary code.
    pub fn accept_code(&self) -> Option<i32> {
        self.keys.get(ACCEPT_KEY_INDEX).and_then(Key::primary_code)
    }

    /// Width needed to show every key.
    pub fn min_width(&self) -> i32 {
        self.total_width
    }

    /// Total height.
    pub fn height(&self) -> i32 {
        self.total_height
    }

    /// The display width this pad was built for.
    pub fn display_width(&self) -> i32 {
        self.display_width
    }

    /// Squared distance within which a key counts as near a touch.
    pub fn proximity_threshold(&self) -> i32 {
        self.proximity_threshold
    }
}

fn corner_flags(index: usize) -> EdgeFlags {
    match index {
        0 => EdgeFlags::LEFT | EdgeFlags::TOP,
        i if i == GRID_WIDTH - 1 => EdgeFlags::RIGHT | EdgeFlags::TOP,
        i if i == KEY_COUNT - GRID_WIDTH => EdgeFlags::LEFT | EdgeFlags::BOTTOM,
        i if i == KEY_COUNT - 1 => EdgeFlags::RIGHT | EdgeFlags::BOTTOM,
        _ => EdgeFlags::empty(),
    }
}
