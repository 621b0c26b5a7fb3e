// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passpad Keyboard: the key model, layout engine and hit tester of a numeric touch keypad.
//!
//! - [`Key`]: codes, label/icon, integer bounds, [`EdgeFlags`] and press state.
//! - [`Keyboard`]: the fixed 3×4 pad (`1 2 3 / 4 5 6 / 7 8 9 / DEL 0 <accept>`), resize,
//!   and the lazily built neighbour grid from [`passpad_index`].
//! - [`HitTester`]: maps a touch point to a key index, with optional proximity
//!   correction and a ranked [`Candidates`] list of nearby codes.
//! - [`codes`]: the fixed key-code set and comma-separated code parsing.
//!
//! Keys are referred to by index everywhere; the [`Keyboard`] is their only owner.
//!
//! # Example
//!
//! ```rust
//! use passpad_keyboard::{HitTester, Keyboard, codes};
//!
//! let mut kb = Keyboard::new(300);
//! let mut tester = HitTester::new();
//!
//! // Centre of the middle key ("5").
//! assert_eq!(tester.locate(&mut kb, 150, 150), Some(4));
//!
//! // With proximity correction on, nearby keys are ranked as well.
//! tester.set_proximity_correction(true);
//! let (hit, near) = tester.locate_with_candidates(&mut kb, 110, 150);
//! assert_eq!(hit, Some(4));
//! assert_eq!(near.as_slice()[..2], [codes::digit_code(5), codes::digit_code(4)]);
//!
//! // Shrinking the pad moves the keys; the grid follows on the next query.
//! kb.resize(150, 200);
//! assert_eq!(tester.locate(&mut kb, 120, 120), Some(8));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod codes;
pub mod error;
pub mod hit;
pub mod keyboard;
pub mod types;

pub use error::CodeError;
pub use hit::{Candidates, HitTester, MAX_NEARBY_KEYS};
pub use keyboard::{ACCEPT_KEY_INDEX, GRID_HEIGHT, GRID_WIDTH, KEY_COUNT, Keyboard};
pub use types::{EdgeFlags, Icon, Key, KeyState};
