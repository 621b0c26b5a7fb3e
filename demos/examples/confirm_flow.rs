// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Confirm flow.
//!
//! A passcode chosen on a first pad is handed to a second pad that asks for it
//! again. Three attempts are made: too short, wrong and right.
//!
//! Run:
//! - `cargo run -p passpad_demos --example confirm_flow`

use passpad_entry::{ConfirmFlow, Handoff, Outcome, PassCodeField};
use passpad_gesture::{KeyboardConfig, KeyboardView, TouchEvent};

struct Pad {
    view: KeyboardView,
    now: u64,
}

impl Pad {
    fn new() -> Self {
        let mut view = KeyboardView::new(300, KeyboardConfig::default());
        view.set_size(300, 400);
        Self { view, now: 0 }
    }

    fn tap_key(&mut self, index: usize) {
        let x = (index % 3) as f64 * 100.0 + 50.0;
        let y = (index / 3) as f64 * 100.0 + 50.0;
        self.view.on_touch_event(&TouchEvent::down(x, y, self.now));
        self.view
            .on_touch_event(&TouchEvent::up(x, y, self.now + 50));
        self.now += 1_000;
    }

    fn type_code(&mut self, code: &str) {
        for digit in code.chars() {
            let index = match digit {
                '0' => 10,
                d => d as usize - '1' as usize,
            };
            self.tap_key(index);
        }
    }
}

fn main() {
    env_logger::init();

    // Step one: choose a passcode. The default `Clear` key wipes the field.
    let mut first = Pad::new();
    let chosen = PassCodeField::new();
    chosen.attach(&mut first.view);
    chosen.set_on_complete(|code| println!("chose passcode {code}"));
    first.type_code("90");
    first.tap_key(11);
    first.type_code("2468");
    let handoff = Handoff::with_code(chosen.text());

    // Step two: confirm it.
    let mut second = Pad::new();
    let flow = ConfirmFlow::new(PassCodeField::new(), handoff);
    flow.attach(&mut second.view);
    flow.set_on_outcome(|outcome| {
        let message = match outcome {
            Outcome::Match => "passcode set",
            Outcome::Mismatch => "passcodes do not match",
            Outcome::Incomplete => "enter the whole passcode",
        };
        println!("{message}");
    });

    second.type_code("24");
    second.tap_key(11);
    second.type_code("61");
    second.tap_key(11);
    for _ in 0..4 {
        second.tap_key(9);
    }
    second.type_code("2468");
    second.tap_key(11);
}
