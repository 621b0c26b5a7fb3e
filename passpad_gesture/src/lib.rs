// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passpad Gesture: turns touch samples into key events for the Passpad keypad.
//!
//! ## Overview
//!
//! - [`GestureMachine`]: the Down/Move/Up state machine with held-key repeat,
//!   long-press, multi-tap cycling and release correction.
//! - [`TimerQueue`]: the delayed-message queue behind repeat and long-press. Time is
//!   supplied by the host; nothing here reads a clock.
//! - [`Listeners`]: an ordered observer registry of [`KeyboardActionListener`]s with
//!   snapshot-per-dispatch semantics.
//! - [`KeyboardView`]: the facade a host embeds. It owns the keyboard, the machine,
//!   the render cache and the listeners, and maps view coordinates to keyboard ones.
//!
//! ## Event flow
//!
//! Touch → [`passpad_keyboard::HitTester`] (via the keyboard's neighbour grid) →
//! [`GestureMachine`] → [`Listeners`]. Keys whose press state changes are redrawn into
//! the [`passpad_render::RenderCache`] immediately; the host learns what to repaint from
//! [`KeyboardView::take_repaint`].
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use passpad_gesture::{KeyboardActionListener, KeyboardConfig, KeyboardView, TouchEvent};
//!
//! #[derive(Default)]
//! struct Typed(RefCell<Vec<i32>>);
//! impl KeyboardActionListener for Typed {
//!     fn on_key(&self, code: i32, _: &[i32]) {
//!         self.0.borrow_mut().push(code);
//!     }
//! }
//!
//! let mut view = KeyboardView::new(300, KeyboardConfig::default());
//! view.set_size(300, 400);
//! let typed = Rc::new(Typed::default());
//! view.add_listener(typed.clone());
//!
//! // Tap the "5" key.
//! view.on_touch_event(&TouchEvent::down(150.0, 150.0, 0));
//! view.on_touch_event(&TouchEvent::up(150.0, 150.0, 60));
//! assert_eq!(*typed.0.borrow(), vec![i32::from(b'5')]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod listener;
pub mod machine;
pub mod press;
pub mod timer;
pub mod types;
pub mod view;

pub use config::{KeyboardConfig, Timing};
pub use listener::{KeyboardActionListener, ListenerId, Listeners};
pub use machine::{GestureMachine, MultiTap, Session};
pub use timer::{TimerHandle, TimerQueue};
pub use types::{TimerKind, TouchAction, TouchEvent};
pub use view::KeyboardView;
