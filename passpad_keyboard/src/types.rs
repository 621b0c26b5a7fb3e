// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the keypad: keys, edge flags, icons, and visual key state.

use alloc::string::String;
use alloc::vec::Vec;

use passpad_index::Bounds;

bitflags::bitflags! {
    /// Sides of the keyboard a key touches.
    ///
    /// A flagged key's hit region extends past its bounds toward the keyboard edge on
    /// that side, so touches at the perimeter never land in a dead zone.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EdgeFlags: u8 {
        /// Key is on the left edge.
        const LEFT   = 0b0000_0001;
        /// Key is on the right edge.
        const RIGHT  = 0b0000_0010;
        /// Key is on the top edge.
        const TOP    = 0b0000_0100;
        /// Key is on the bottom edge.
        const BOTTOM = 0b0000_1000;
    }
}

/// An image drawn in place of a label.
///
/// The keypad never decodes images; `id` is an opaque handle the canvas resolves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Icon {
    /// Host-defined image identifier.
    pub id: u32,
    /// Intrinsic width.
    pub width: i32,
    /// Intrinsic height.
    pub height: i32,
}

/// Visual state used to pick a key background.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Not touched.
    #[default]
    Normal,
    /// Currently held.
    Pressed,
}

/// A single key: geometry, codes, and press state.
///
/// Geometry is owned by the [`Keyboard`](crate::Keyboard) and rewritten on resize;
/// everything else refers to keys by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Key {
    /// Codes this key can produce. The first is the primary code; the rest are
    /// alternates cycled through by multi-tap.
    pub codes: Vec<i32>,
    /// Text drawn on the key.
    pub label: Option<String>,
    /// Image drawn when there is no label.
    pub icon: Option<Icon>,
    /// Position and size in keyboard coordinates.
    pub bounds: Bounds,
    /// Horizontal gap to the next key.
    pub gap: i32,
    /// Keyboard sides this key touches.
    pub edge_flags: EdgeFlags,
    /// Whether holding the key repeats it.
    pub repeatable: bool,
    /// Whether the key is currently held.
    pub pressed: bool,
}

impl Key {
    /// The primary code, if the key has any codes.
    pub fn primary_code(&self) -> Option<i32> {
        self.codes.first().copied()
    }

    /// The code at `index` in the multi-tap cycle.
    pub fn code_at(&self, index: usize) -> Option<i32> {
        self.codes.get(index).copied()
    }

    /// Whether the point hits this key, counting edge extension.
    ///
    /// On a flagged side the bound is dropped entirely, so e.g. a `LEFT` key accepts
    /// any `x` left of its right edge.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        let b = &self.bounds;
        let f = self.edge_flags;
        (x >= b.x || (f.contains(EdgeFlags::LEFT) && x <= b.right()))
            && (x < b.right() || (f.contains(EdgeFlags::RIGHT) && x >= b.x))
            && (y >= b.y || (f.contains(EdgeFlags::TOP) && y <= b.bottom()))
            && (y < b.bottom() || (f.contains(EdgeFlags::BOTTOM) && y >= b.y))
    }

    /// Squared distance from the key's centre to the point.
    pub fn squared_distance_from(&self, x: i32, y: i32) -> i32 {
        self.bounds.squared_distance_from_center(x, y)
    }

    /// Mark the key held.
    pub fn on_pressed(&mut self) {
        self.pressed = true;
    }

    /// Mark the key released.
    pub fn on_released(&mut self) {
        self.pressed = false;
    }

    /// Background state for drawing.
    pub fn state(&self) -> KeyState {
        if self.pressed {
            KeyState::Pressed
        } else {
            KeyState::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn key_at(x: i32, y: i32, flags: EdgeFlags) -> Key {
        Key {
            codes: vec![49],
            bounds: Bounds::new(x, y, 100, 100),
            edge_flags: flags,
            ..Key::default()
        }
    }

    #[test]
    fn plain_key_is_half_open() {
        let k = key_at(100, 100, EdgeFlags::empty());
        assert!(k.is_inside(100, 100));
        assert!(k.is_inside(199, 199));
        assert!(!k.is_inside(200, 150));
        assert!(!k.is_inside(150, 99));
    }

    #[test]
    fn edge_flags_extend_toward_boundary() {
        let k = key_at(0, 0, EdgeFlags::LEFT | EdgeFlags::TOP);
        assert!(k.is_inside(-40, -40), "top-left key owns the outside corner");
        assert!(!k.is_inside(-40, 100), "but not below itself");
        let k = key_at(200, 300, EdgeFlags::RIGHT | EdgeFlags::BOTTOM);
        assert!(k.is_inside(500, 900));
        assert!(!k.is_inside(199, 350));
    }

    #[test]
    fn press_state_round_trips() {
        let mut k = key_at(0, 0, EdgeFlags::empty());
        assert_eq!(k.state(), KeyState::Normal);
        k.on_pressed();
        assert_eq!(k.state(), KeyState::Pressed);
        k.on_released();
        assert_eq!(k.state(), KeyState::Normal);
    }

    #[test]
    fn codes_accessors() {
        let mut k = key_at(0, 0, EdgeFlags::empty());
        k.codes = vec![97, 98, 99];
        assert_eq!(k.primary_code(), Some(97));
        assert_eq!(k.code_at(2), Some(99));
        assert_eq!(k.code_at(3), None);
        k.codes.clear();
        assert_eq!(k.primary_code(), None);
    }
}
