// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typing a passcode on the keypad and confirming it.

use std::cell::RefCell;
use std::rc::Rc;

use passpad_entry::{CONFIRM_CODE, ConfirmFlow, Handoff, Outcome, PassCodeField};
use passpad_gesture::{KeyboardConfig, KeyboardView, TouchEvent};

const DELETE: usize = 9;
const ACCEPT: usize = 11;

// Key index for a digit on the 1-2-3 / 4-5-6 / 7-8-9 / DEL-0-accept pad.
fn key_for(digit: char) -> usize {
    match digit {
        '0' => 10,
        d => d as usize - '1' as usize,
    }
}

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

    fn tap(&mut self, index: usize) {
        let x = (index % 3) as f64 * 100.0 + 50.0;
        let y = (index / 3) as f64 * 100.0 + 50.0;
        self.view
            .on_touch_event(&TouchEvent::down(x, y, self.now));
        self.view
            .on_touch_event(&TouchEvent::up(x, y, self.now + 40));
        self.now += 1_000;
    }

    fn type_code(&mut self, code: &str) {
        for d in code.chars() {
            self.tap(key_for(d));
        }
    }
}

fn confirm(stored: Option<&str>, typed: &str) -> Outcome {
    let mut pad = Pad::new();
    let handoff = Handoff {
        stored_code: stored.map(String::from),
    };
    let flow = ConfirmFlow::new(PassCodeField::new(), handoff);
    flow.attach(&mut pad.view);
    pad.type_code(typed);
    pad.tap(ACCEPT);
    flow.last_outcome().unwrap()
}

#[test]
fn matching_code_confirms() {
    assert_eq!(confirm(Some("1234"), "1234"), Outcome::Match, "same code");
}

#[test]
fn different_code_is_a_mismatch() {
    assert_eq!(confirm(Some("5678"), "1234"), Outcome::Mismatch, "other code");
    assert_eq!(confirm(None, "1234"), Outcome::Mismatch, "nothing stored");
}

#[test]
fn short_entry_is_incomplete() {
    assert_eq!(confirm(Some("1234"), "12"), Outcome::Incomplete, "two digits");
}

#[test]
fn accept_key_is_relabelled() {
    let mut pad = Pad::new();
    let flow = ConfirmFlow::new(PassCodeField::new(), Handoff::default());
    flow.attach(&mut pad.view);
    assert_eq!(
        pad.view.accept_key(),
        (Some("OK"), &[CONFIRM_CODE][..]),
        "attaching installs the OK key"
    );
}

#[test]
fn corrections_before_confirming() {
    let mut pad = Pad::new();
    let flow = ConfirmFlow::new(PassCodeField::new(), Handoff::with_code("2580"));
    flow.attach(&mut pad.view);
    let outcomes: Rc<RefCell<Vec<Outcome>>> = Rc::default();
    let sink = outcomes.clone();
    flow.set_on_outcome(move |o| sink.borrow_mut().push(o));

    pad.type_code("259");
    pad.tap(DELETE);
    pad.type_code("80");
    assert_eq!(flow.field().text(), "2580", "delete fixed the typo");
    pad.type_code("7");
    assert_eq!(flow.field().text(), "2580", "a full field drops extra digits");
    pad.tap(ACCEPT);

    assert_eq!(*outcomes.borrow(), [Outcome::Match], "one check, matched");
}

#[test]
fn completion_fires_when_the_last_digit_lands() {
    let mut pad = Pad::new();
    let field = PassCodeField::with_target_length(6).unwrap();
    field.attach(&mut pad.view);
    let completed: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = completed.clone();
    field.set_on_complete(move |text| sink.borrow_mut().push(text.into()));

    pad.type_code("12345");
    assert!(completed.borrow().is_empty(), "not yet full");
    pad.type_code("6");
    assert_eq!(*completed.borrow(), ["123456"], "full after six digits");
}

#[test]
fn default_accept_key_clears_the_field() {
    let mut pad = Pad::new();
    let field = PassCodeField::new();
    field.attach(&mut pad.view);
    pad.type_code("987");
    pad.tap(ACCEPT);
    assert!(field.is_empty(), "Clear empties the field");
}
