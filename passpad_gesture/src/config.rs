// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for the keypad view and its gesture timing.

use alloc::string::String;
use alloc::vec::Vec;

use passpad_keyboard::codes::KEYCODE_CLEAR;
use passpad_keyboard::keyboard::DEFAULT_ACCEPT_LABEL;
use passpad_render::{KeyStyle, Padding};

/// Gesture timeouts in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timing {
    /// Delay between pressing a repeatable key and the first repeat.
    pub repeat_start_delay: u64,
    /// Interval between later repeats.
    pub repeat_interval: u64,
    /// Hold time before a long press fires.
    pub long_press_timeout: u64,
    /// Window in which another tap on a multi-code key advances its cycle.
    pub multi_tap_interval: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            repeat_start_delay: 400,
            repeat_interval: 50,
            long_press_timeout: 800,
            multi_tap_interval: 800,
        }
    }
}

/// Everything a [`KeyboardView`](crate::KeyboardView) is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardConfig {
    /// Label of the trailing accept key.
    pub accept_label: String,
    /// Codes of the accept key. Empty means the label's first character.
    pub accept_codes: Vec<i32>,
    /// Horizontal gap between keys, applied on resize.
    pub horizontal_gap: i32,
    /// Vertical gap between rows, applied on resize.
    pub vertical_gap: i32,
    /// Offer near misses and ranked candidates.
    pub proximity_correction: bool,
    /// Added to every touch `y` before hit testing.
    pub vertical_correction: i32,
    /// View padding around the keys.
    pub padding: Padding,
    /// Key text and background style.
    pub style: KeyStyle,
    /// Gesture timeouts.
    pub timing: Timing,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            accept_label: String::from(DEFAULT_ACCEPT_LABEL),
            accept_codes: alloc::vec![KEYCODE_CLEAR],
            horizontal_gap: 0,
            vertical_gap: 0,
            proximity_correction: false,
            vertical_correction: 0,
            padding: Padding::default(),
            style: KeyStyle::default(),
            timing: Timing::default(),
        }
    }
}
