// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passpad Render: the off-screen key buffer and its dirty-rectangle cache.
//!
//! - [`Canvas`]: the host's drawing target (backgrounds, labels, icons).
//! - [`Buffer`]: a recorded display list standing in for an off-screen bitmap.
//! - [`RenderCache`]: decides between single-key and full buffer passes, tracks the
//!   dirty region and the repaint requests for the host.
//! - [`KeyStyle`] and [`Padding`]: label sizes, colours, shadow, key and view padding.
//!
//! Geometry uses Kurbo types at the drawing boundary and integer [`passpad_index::Bounds`]
//! for damage bookkeeping.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use passpad_keyboard::{Icon, KeyState, Keyboard};
//! use passpad_render::{Canvas, KeyStyle, Padding, RenderCache, TextStyle};
//!
//! #[derive(Default)]
//! struct Count(usize);
//! impl Canvas for Count {
//!     fn draw_background(&mut self, _: Rect, _: KeyState) { self.0 += 1; }
//!     fn draw_label(&mut self, _: &str, _: Point, _: &TextStyle) {}
//!     fn draw_icon(&mut self, _: Icon, _: Rect) {}
//! }
//!
//! let kb = Keyboard::new(300);
//! let mut cache = RenderCache::new(KeyStyle::default(), Padding::default());
//! cache.set_size(300, 400);
//!
//! let mut screen = Count::default();
//! cache.draw(kb.keys(), &mut screen);
//! assert_eq!(screen.0, 12);
//!
//! // Touching one key only repaints that key.
//! cache.invalidate_key(kb.keys(), 4);
//! assert_eq!(cache.last_pass().map(|p| p.keys_drawn), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod cache;
pub mod canvas;
pub mod style;

pub use cache::{PassReport, RenderCache};
pub use canvas::{Buffer, Canvas, DrawOp, TextStyle};
pub use style::{KeyStyle, Padding};
