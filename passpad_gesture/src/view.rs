// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keypad view: keyboard, gestures, render cache and listeners behind one facade.

use alloc::rc::Rc;

use passpad_index::Bounds;
use passpad_keyboard::Keyboard;
use passpad_render::{Canvas, RenderCache};

use crate::config::KeyboardConfig;
use crate::listener::{KeyboardActionListener, ListenerId, Listeners};
use crate::machine::GestureMachine;
use crate::types::TouchEvent;

// Slack allowed before the view gives up its preferred width.
const MEASURE_SLACK: i32 = 10;

/// A numeric keypad view.
///
/// The host forwards touch samples and clock ticks, calls [`draw`](Self::draw) when
/// [`take_repaint`](Self::take_repaint) reports damage, and receives key events
/// through registered [`KeyboardActionListener`]s.
#[derive(Debug)]
pub struct KeyboardView {
    config: KeyboardConfig,
    keyboard: Keyboard,
    gestures: GestureMachine,
    render: RenderCache,
    listeners: Listeners,
}

impl KeyboardView {
    /// Build a view for a display `display_width` units wide.
    pub fn new(display_width: i32, config: KeyboardConfig) -> Self {
        let keyboard = build_keyboard(display_width, &config);
        let mut gestures = GestureMachine::new(config.timing);
        gestures.set_proximity_correction_enabled(config.proximity_correction);
        let mut render = RenderCache::new(config.style, config.padding);
        render.invalidate_all();
        Self {
            config,
            keyboard,
            gestures,
            render,
            listeners: Listeners::new(),
        }
    }

    /// Register a listener.
    pub fn add_listener(&mut self, listener: Rc<dyn KeyboardActionListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// The listener registry.
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Whether near misses count as hits and `on_key` carries nearby codes.
    pub fn is_proximity_correction_enabled(&self) -> bool {
        self.gestures.is_proximity_correction_enabled()
    }

    /// Turn proximity correction on or off.
    pub fn set_proximity_correction_enabled(&mut self, enabled: bool) {
        self.config.proximity_correction = enabled;
        self.gestures.set_proximity_correction_enabled(enabled);
    }

    /// Replace the accept key's label and codes and schedule a full redraw.
    ///
    /// Empty `codes` with a non-empty label means the label's first character.
    pub fn set_accept_key(&mut self, label: &str, codes: &[i32]) {
        self.keyboard.set_accept_key(label, codes);
        let (label, codes) = self.keyboard.accept_key();
        self.config.accept_label = label.unwrap_or_default().into();
        self.config.accept_codes = codes.to_vec();
        self.render.invalidate_all();
    }

    /// The accept key's label and codes.
    pub fn accept_key(&self) -> (Option<&str>, &[i32]) {
        self.keyboard.accept_key()
    }

    /// Preferred size given the available space.
    ///
    /// Width is the keyboard width plus padding, unless less than that plus a little
    /// slack is available, in which case it is all of the available width. Height is
    /// always the available height.
    pub fn measure(&self, available_width: i32, available_height: i32) -> (i32, i32) {
        let mut width = self.keyboard.min_width() + self.config.padding.horizontal();
        if available_width < width + MEASURE_SLACK {
            width = available_width;
        }
        (width, available_height)
    }

    /// The view now has size `width × height`: fit the keys inside the padding and
    /// drop the buffer.
    pub fn set_size(&mut self, width: i32, height: i32) {
        let pad = self.config.padding;
        self.keyboard
            .resize(width - pad.horizontal(), height - pad.vertical());
        self.render.set_size(width, height);
    }

    /// Handle a touch sample in view coordinates.
    pub fn on_touch_event(&mut self, event: &TouchEvent) {
        let pad = self.config.padding;
        let x = to_units(event.position.x) - pad.left;
        let y = to_units(event.position.y) + self.config.vertical_correction - pad.top;
        self.gestures.handle_touch(
            &mut self.keyboard,
            &self.listeners,
            event.action,
            x,
            y,
            event.time,
        );
        self.flush_invalidated();
    }

    /// Advance the clock, firing any repeat or long-press timers now due.
    pub fn advance_to(&mut self, now: u64) {
        self.gestures
            .advance(&mut self.keyboard, &self.listeners, now);
        self.flush_invalidated();
    }

    /// When the host should next call [`advance_to`](Self::advance_to), if at all.
    pub fn next_deadline(&self) -> Option<u64> {
        self.gestures.next_deadline()
    }

    fn flush_invalidated(&mut self) {
        for index in self.gestures.take_invalidated() {
            self.render.invalidate_key(self.keyboard.keys(), index);
        }
    }

    /// Paint the keypad onto `canvas`.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.render.draw(self.keyboard.keys(), canvas);
    }

    /// Schedule a full redraw.
    pub fn invalidate_all(&mut self) {
        self.render.invalidate_all();
    }

    /// Redraw one key into the buffer now. Unknown indices are ignored.
    pub fn invalidate_key(&mut self, index: usize) {
        self.render.invalidate_key(self.keyboard.keys(), index);
    }

    /// Region the host should repaint since the last call.
    pub fn take_repaint(&mut self) -> Option<Bounds> {
        self.render.take_repaint()
    }

    /// Stop timers and release the buffer, e.g. when the view is detached.
    pub fn closing(&mut self) {
        self.gestures.cancel_timers();
        self.render.release();
    }

    /// Recreate the keyboard from the configuration and schedule a full redraw.
    pub fn rebuild(&mut self) {
        self.gestures.reset();
        self.keyboard = build_keyboard(self.keyboard.display_width(), &self.config);
        self.render.release();
        self.render.invalidate_all();
    }

    /// The keyboard.
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The gesture machine.
    pub fn gestures(&self) -> &GestureMachine {
        &self.gestures
    }

    /// The render cache.
    pub fn render(&self) -> &RenderCache {
        &self.render
    }

    /// The configuration in effect.
    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }
}

fn build_keyboard(display_width: i32, config: &KeyboardConfig) -> Keyboard {
    let mut keyboard = Keyboard::new(display_width);
    keyboard.set_accept_key(&config.accept_label, &config.accept_codes);
    keyboard.set_gaps(config.horizontal_gap, config.vertical_gap);
    keyboard
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "touch coordinates are truncated to whole layout units"
)]
fn to_units(v: f64) -> i32 {
    v as i32
}
