// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keypad behaviour observed through its listeners.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use passpad_entry::PassCodeField;
use passpad_gesture::{
    GestureMachine, KeyboardActionListener, KeyboardConfig, KeyboardView, Listeners, Timing,
    TouchAction, TouchEvent,
};
use passpad_index::Bounds;
use passpad_keyboard::codes::{KEYCODE_DELETE, digit_code};
use passpad_keyboard::{Icon, KeyState, Keyboard};
use passpad_render::{Canvas, Padding, TextStyle};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Ev {
    Press(i32),
    Key(i32),
    Release(i32),
    LongPress(i32),
}

#[derive(Default)]
struct Log {
    events: RefCell<Vec<Ev>>,
    consume_long_press: bool,
}

impl Log {
    fn keys(&self) -> Vec<i32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Ev::Key(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl KeyboardActionListener for Log {
    fn on_press(&self, code: i32) {
        self.events.borrow_mut().push(Ev::Press(code));
    }

    fn on_release(&self, code: i32) {
        self.events.borrow_mut().push(Ev::Release(code));
    }

    fn on_key(&self, code: i32, _: &[i32]) {
        self.events.borrow_mut().push(Ev::Key(code));
    }

    fn on_long_press(&self, code: i32) -> bool {
        self.events.borrow_mut().push(Ev::LongPress(code));
        self.consume_long_press
    }
}

#[derive(Default)]
struct Counter {
    backgrounds: usize,
    labels: Vec<String>,
}

impl Canvas for Counter {
    fn draw_background(&mut self, _: Rect, _: KeyState) {
        self.backgrounds += 1;
    }

    fn draw_label(&mut self, text: &str, _: Point, _: &TextStyle) {
        self.labels.push(text.into());
    }

    fn draw_icon(&mut self, _: Icon, _: Rect) {}
}

fn view() -> KeyboardView {
    let mut view = KeyboardView::new(300, KeyboardConfig::default());
    view.set_size(300, 400);
    view
}

// Centre of the key at `index` on a 300×400 pad.
fn center(index: usize) -> (f64, f64) {
    let col = (index % 3) as f64;
    let row = (index / 3) as f64;
    (col * 100.0 + 50.0, row * 100.0 + 50.0)
}

fn tap(view: &mut KeyboardView, index: usize, time: u64) {
    let (x, y) = center(index);
    view.on_touch_event(&TouchEvent::down(x, y, time));
    view.on_touch_event(&TouchEvent::up(x, y, time + 40));
}

#[test]
fn every_key_centre_sends_its_code() {
    let mut view = view();
    let log = Rc::new(Log::default());
    view.add_listener(log.clone());
    for (i, t) in (0..12).zip((0..).step_by(1_000)) {
        tap(&mut view, i, t);
    }
    let digits: Vec<i32> = (1..=9).map(digit_code).collect();
    let keys = log.keys();
    assert_eq!(keys[..9], digits[..], "digit keys in reading order");
    assert_eq!(keys[9], KEYCODE_DELETE, "bottom left is delete");
    assert_eq!(keys[10], digit_code(0), "bottom middle is zero");
}

#[test]
fn held_delete_repeats_without_new_downs() {
    let mut view = view();
    let field = PassCodeField::new();
    field.attach(&mut view);
    let log = Rc::new(Log::default());
    view.add_listener(log.clone());

    for (i, t) in [(0, 0), (1, 1_000), (2, 2_000), (3, 3_000)] {
        tap(&mut view, i, t);
    }
    assert_eq!(field.text(), "1234", "four digits typed");

    let (x, y) = center(9);
    view.on_touch_event(&TouchEvent::down(x, y, 10_000));
    view.advance_to(10_000 + 400 + 2 * 50);
    view.on_touch_event(&TouchEvent::up(x, y, 10_510));

    let deletes = log.keys().iter().filter(|&&c| c == KEYCODE_DELETE).count();
    assert!(deletes >= 3, "held delete sent {deletes} times");
    assert!(field.is_empty(), "repeated deletes emptied the field");
    assert_eq!(view.next_deadline(), None, "lifting cancels the repeat timer");
}

#[test]
fn consumed_long_press_suppresses_the_key() {
    let mut view = view();
    let log = Rc::new(Log {
        consume_long_press: true,
        ..Log::default()
    });
    view.add_listener(log.clone());

    let (x, y) = center(4);
    view.on_touch_event(&TouchEvent::down(x, y, 0));
    assert_eq!(view.next_deadline(), Some(800), "long press armed on down");
    view.advance_to(900);
    view.on_touch_event(&TouchEvent::up(x, y, 950));

    let five = digit_code(5);
    assert_eq!(
        *log.events.borrow(),
        vec![Ev::Press(five), Ev::LongPress(five)],
        "no key or release after a consumed long press"
    );

    tap(&mut view, 4, 2_000);
    assert_eq!(log.keys(), vec![five], "the next gesture sends normally");
}

#[test]
fn multi_tap_cycles_through_codes() {
    let mut keyboard = Keyboard::new(300);
    let a = i32::from(b'a');
    let b = i32::from(b'b');
    let two = digit_code(2);
    keyboard.keys_mut()[1].codes = vec![two, a, b];

    let listeners = Listeners::new();
    let log = Rc::new(Log::default());
    listeners.add(log.clone());
    let mut machine = GestureMachine::new(Timing::default());

    for t in [0, 200, 400] {
        machine.handle_touch(&mut keyboard, &listeners, TouchAction::Down, 150, 50, t);
        machine.handle_touch(&mut keyboard, &listeners, TouchAction::Up, 150, 50, t + 30);
    }
    assert_eq!(
        log.keys(),
        vec![two, KEYCODE_DELETE, a, KEYCODE_DELETE, b],
        "each tap inside the window replaces the previous code"
    );
}

#[test]
fn corner_shared_by_four_keys_resolves_to_one() {
    let mut view = view();
    let log = Rc::new(Log::default());
    view.add_listener(log.clone());
    let corners = [(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 300.0)];
    for ((x, y), t) in corners.into_iter().zip((0..).step_by(1_000)) {
        view.on_touch_event(&TouchEvent::down(x, y, t));
        view.on_touch_event(&TouchEvent::up(x, y, t + 40));
    }
    assert_eq!(
        log.keys(),
        vec![digit_code(5), digit_code(6), digit_code(9), digit_code(0)],
        "a shared corner belongs to the key below and to the right"
    );
}

#[test]
fn resize_rebuilds_the_neighbour_grid_lazily() {
    let mut view = view();
    let log = Rc::new(Log::default());
    view.add_listener(log.clone());

    view.on_touch_event(&TouchEvent::down(120.0, 120.0, 0));
    view.on_touch_event(&TouchEvent::up(120.0, 120.0, 40));
    assert!(view.keyboard().has_grid(), "first hit test built the grid");

    view.set_size(150, 200);
    assert!(!view.keyboard().has_grid(), "resize dropped the grid");
    view.on_touch_event(&TouchEvent::down(120.0, 120.0, 1_000));
    view.on_touch_event(&TouchEvent::up(120.0, 120.0, 1_040));
    assert_eq!(
        log.keys(),
        vec![digit_code(5), digit_code(9)],
        "the same point lands on a different key after shrinking"
    );
}

#[test]
fn resize_that_fits_is_idempotent() {
    let mut view = view();
    let before: Vec<Bounds> = view.keyboard().keys().iter().map(|k| k.bounds).collect();
    view.set_size(300, 400);
    view.set_size(600, 800);
    view.set_size(0, 400);
    let after: Vec<Bounds> = view.keyboard().keys().iter().map(|k| k.bounds).collect();
    assert_eq!(before, after, "sizes the pad already fits change nothing");
}

#[test]
fn accept_key_round_trip_keeps_geometry() {
    let mut view = view();
    let before: Vec<Bounds> = view.keyboard().keys().iter().map(|k| k.bounds).collect();

    view.set_accept_key("OK", &[0x1000]);
    assert_eq!(
        view.accept_key(),
        (Some("OK"), &[0x1000][..]),
        "accept key reads back"
    );
    assert_eq!(view.config().accept_label, "OK", "config follows the key");
    assert_eq!(view.config().accept_codes, [0x1000], "config follows the key");

    view.invalidate_all();
    let mut canvas = Counter::default();
    view.draw(&mut canvas);
    assert_eq!(canvas.backgrounds, 12, "full redraw paints every key");
    assert!(canvas.labels.iter().any(|l| l == "OK"), "new label drawn");

    let after: Vec<Bounds> = view.keyboard().keys().iter().map(|k| k.bounds).collect();
    assert_eq!(before, after, "relabelling does not move keys");
}

#[test]
fn tap_repaints_only_the_key_inside_padding() {
    let config = KeyboardConfig {
        padding: Padding::uniform(10),
        ..KeyboardConfig::default()
    };
    let mut view = KeyboardView::new(300, config);
    view.set_size(320, 420);
    let log = Rc::new(Log::default());
    view.add_listener(log.clone());

    let mut canvas = Counter::default();
    view.draw(&mut canvas);
    let full = view.take_repaint();
    assert!(full.is_some(), "first draw requests a full repaint");

    view.on_touch_event(&TouchEvent::down(160.0, 160.0, 0));
    view.on_touch_event(&TouchEvent::up(160.0, 160.0, 40));
    assert_eq!(log.keys(), vec![digit_code(5)], "padding is subtracted");
    assert_eq!(
        view.take_repaint(),
        Some(Bounds::new(110, 110, 100, 100)),
        "only the touched key is repainted"
    );
    let pass = view.render().last_pass().unwrap();
    assert!(pass.single_key, "key invalidation draws incrementally");
    assert_eq!(pass.keys_drawn, 1, "one key drawn");
}

#[test]
fn press_precedes_release_for_every_tap() {
    let mut view = view();
    let log = Rc::new(Log::default());
    view.add_listener(log.clone());
    tap(&mut view, 0, 0);
    tap(&mut view, 10, 1_000);
    let one = digit_code(1);
    let zero = digit_code(0);
    assert_eq!(
        *log.events.borrow(),
        vec![
            Ev::Press(one),
            Ev::Key(one),
            Ev::Release(one),
            Ev::Press(zero),
            Ev::Key(zero),
            Ev::Release(zero),
        ],
        "press, key, release in order"
    );
}
