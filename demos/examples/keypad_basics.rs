// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keypad basics.
//!
//! Builds a keypad view, paints it onto a text canvas, then replays a few touch
//! gestures (a tap, a held delete, a long press and a slide between keys) and prints
//! every listener callback.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p passpad_demos --example keypad_basics`

use kurbo::{Point, Rect};
use passpad_gesture::{KeyboardActionListener, KeyboardConfig, KeyboardView, TouchEvent};
use passpad_keyboard::{Icon, KeyState};
use passpad_render::{Canvas, TextStyle};
use std::rc::Rc;

struct Printer;

impl KeyboardActionListener for Printer {
    fn on_press(&self, code: i32) {
        println!("  press   {code}");
    }
    fn on_release(&self, code: i32) {
        println!("  release {code}");
    }
    fn on_key(&self, code: i32, candidates: &[i32]) {
        println!("  key     {code} candidates={candidates:?}");
    }
    fn on_f1_key(&self, code: i32) {
        println!("  accept  {code}");
    }
    fn on_long_press(&self, code: i32) -> bool {
        println!("  long    {code}");
        code == i32::from(b'0')
    }
}

struct TextCanvas;

impl Canvas for TextCanvas {
    fn draw_background(&mut self, rect: Rect, state: KeyState) {
        println!("  bg    {rect:?} {state:?}");
    }
    fn draw_label(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        println!("  label {text:?} at {anchor:?} size={} bold={}", style.size, style.bold);
    }
    fn draw_icon(&mut self, icon: Icon, rect: Rect) {
        println!("  icon  {} in {rect:?}", icon.id);
    }
}

fn main() {
    env_logger::init();

    let config = KeyboardConfig {
        proximity_correction: true,
        ..KeyboardConfig::default()
    };
    let mut view = KeyboardView::new(300, config);
    let (w, h) = view.measure(320, 400);
    view.set_size(w, h);
    view.add_listener(Rc::new(Printer));

    println!("== Initial paint ({w}x{h}) ==");
    view.draw(&mut TextCanvas);

    println!("== Tap 5 ==");
    view.on_touch_event(&TouchEvent::down(150.0, 150.0, 0));
    view.on_touch_event(&TouchEvent::up(150.0, 150.0, 60));
    println!("  repaint {:?}", view.take_repaint());

    println!("== Hold delete ==");
    view.on_touch_event(&TouchEvent::down(50.0, 350.0, 1_000));
    view.advance_to(1_520);
    view.on_touch_event(&TouchEvent::up(50.0, 350.0, 1_530));

    println!("== Long press 0 (consumed) ==");
    view.on_touch_event(&TouchEvent::down(150.0, 350.0, 3_000));
    if let Some(deadline) = view.next_deadline() {
        view.advance_to(deadline);
    }
    view.on_touch_event(&TouchEvent::up(150.0, 350.0, 3_900));

    println!("== Slide 1 -> 2, brief stop on 2 ==");
    view.on_touch_event(&TouchEvent::down(50.0, 50.0, 5_000));
    view.on_touch_event(&TouchEvent::moved(150.0, 50.0, 5_300));
    view.on_touch_event(&TouchEvent::up(150.0, 50.0, 5_320));

    println!("== Near miss below the pad ==");
    view.on_touch_event(&TouchEvent::down(150.0, 410.0, 7_000));
    view.on_touch_event(&TouchEvent::up(150.0, 410.0, 7_040));

    view.closing();
}
