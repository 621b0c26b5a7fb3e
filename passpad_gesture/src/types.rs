// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch input types.

use kurbo::Point;

/// What a touch did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// Finger went down; starts a gesture.
    Down,
    /// Finger moved while down.
    Move,
    /// Finger lifted; ends the gesture.
    Up,
    /// The host abandoned the gesture. Only the last touch position is updated.
    Cancel,
}

/// One touch sample in view coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Action.
    pub action: TouchAction,
    /// Position in view coordinates (padding included).
    pub position: Point,
    /// Host clock in milliseconds.
    pub time: u64,
}

impl TouchEvent {
    /// A touch sample at `(x, y)`.
    pub fn new(action: TouchAction, x: f64, y: f64, time: u64) -> Self {
        Self {
            action,
            position: Point::new(x, y),
            time,
        }
    }

    /// Shorthand for a [`TouchAction::Down`] sample.
    pub fn down(x: f64, y: f64, time: u64) -> Self {
        Self::new(TouchAction::Down, x, y, time)
    }

    /// Shorthand for a [`TouchAction::Move`] sample.
    pub fn moved(x: f64, y: f64, time: u64) -> Self {
        Self::new(TouchAction::Move, x, y, time)
    }

    /// Shorthand for a [`TouchAction::Up`] sample.
    pub fn up(x: f64, y: f64, time: u64) -> Self {
        Self::new(TouchAction::Up, x, y, time)
    }
}

/// Which gesture timer an entry belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Held-key repeat.
    Repeat,
    /// Long-press detection.
    LongPress,
}
