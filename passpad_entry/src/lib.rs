// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passpad Entry: passcode widgets that consume the Passpad keypad's events.
//!
//! - [`PassCodeField`]: a length-limited digit field with a completion callback.
//! - [`ConfirmFlow`]: checks the field against a code handed over by an earlier step
//!   when the accept key is pressed.
//!
//! Both are [`KeyboardActionListener`](passpad_gesture::KeyboardActionListener)s and
//! are cheap handles, so a clone can be registered with a
//! [`KeyboardView`](passpad_gesture::KeyboardView) while the host keeps another.
//!
//! ## Example
//!
//! ```rust
//! use passpad_entry::{ConfirmFlow, Handoff, Outcome, PassCodeField};
//! use passpad_gesture::{KeyboardConfig, KeyboardView, TouchEvent};
//!
//! let mut view = KeyboardView::new(300, KeyboardConfig::default());
//! view.set_size(300, 400);
//! let flow = ConfirmFlow::new(PassCodeField::new(), Handoff::with_code("1111"));
//! flow.attach(&mut view);
//!
//! let mut t = 0;
//! let mut tap = |view: &mut KeyboardView, x: f64, y: f64| {
//!     view.on_touch_event(&TouchEvent::down(x, y, t));
//!     view.on_touch_event(&TouchEvent::up(x, y, t + 50));
//!     t += 1000;
//! };
//! for _ in 0..4 {
//!     tap(&mut view, 50.0, 50.0); // "1"
//! }
//! tap(&mut view, 250.0, 350.0); // "OK"
//! assert_eq!(flow.last_outcome(), Some(Outcome::Match));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod confirm;
pub mod error;
pub mod field;

pub use confirm::{CONFIRM_CODE, CONFIRM_LABEL, ConfirmFlow, Handoff, Outcome};
pub use error::FieldError;
pub use field::{DEFAULT_TARGET_LENGTH, PassCodeField};
