// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual press state: which key is drawn pressed, and the transitions between keys.
//!
//! ```
//! use passpad_gesture::press::{PressEvent, PressTracker};
//! let mut p = PressTracker::new();
//! assert_eq!(p.update(Some(4)), vec![PressEvent::Press(4)]);
//! assert_eq!(p.update(Some(5)), vec![PressEvent::Release(4), PressEvent::Press(5)]);
//! assert!(p.update(Some(5)).is_empty());
//! ```

use alloc::vec::Vec;

/// A change in which key is drawn pressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressEvent {
    /// The key stops being drawn pressed.
    Release(usize),
    /// The key starts being drawn pressed.
    Press(usize),
}

/// Tracks the single key drawn pressed.
///
/// Updating to a different key releases the old one before pressing the new one;
/// updating to the same key is silent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PressTracker {
    current: Option<usize>,
}

impl PressTracker {
    /// Nothing pressed.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The key drawn pressed, if any.
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move the press to `key` and return the transitions.
    pub fn update(&mut self, key: Option<usize>) -> Vec<PressEvent> {
        let mut out = Vec::new();
        if key == self.current {
            return out;
        }
        if let Some(old) = self.current {
            out.push(PressEvent::Release(old));
        }
        if let Some(new) = key {
            out.push(PressEvent::Press(new));
        }
        self.current = key;
        out
    }

    /// Release whatever is pressed.
    pub fn clear(&mut self) -> Vec<PressEvent> {
        self.update(None)
    }
}
