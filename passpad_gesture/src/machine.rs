// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! Turns touch samples (in keyboard coordinates) and timer expiries into listener
//! notifications. A gesture runs Down → Move* → Up. Between gestures the machine is
//! idle except for multi-tap bookkeeping, which spans gestures.
//!
//! ## Transitions
//!
//! - Down starts a fresh [`Session`], updates multi-tap state, sends `on_press`, and
//!   arms the long-press timer (and for repeatable keys, sends once and arms repeat).
//! - Move tracks dwell time per key. Sliding to another key snapshots the previous one
//!   as the "last key", re-arms long press and stops repeat.
//! - Up cancels both timers and, unless a long press consumed the gesture or a repeat
//!   key was held, sends the resolved key.
//! - Timer expiries are processed before any touch sample at or after their due time.
//!
//! ## Release correction
//!
//! On Up, when the current key has been dwelt on for less time than the last key, the
//! last key is sent instead, at the position where the finger left it. Note the
//! comparison: the key with the *shorter* time on the other side wins.

use alloc::vec::Vec;

use passpad_keyboard::codes::{KEY_DELETE, KEYCODE_DELETE};
use passpad_keyboard::{HitTester, Keyboard};

use crate::config::Timing;
use crate::listener::Listeners;
use crate::press::{PressEvent, PressTracker};
use crate::timer::{TimerHandle, TimerQueue};
use crate::types::{TimerKind, TouchAction};

/// Per-gesture state, replaced on every Down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Key the gesture currently resolves to.
    pub current_key: Option<usize>,
    /// Key the finger was on before sliding to the current one.
    pub last_key: Option<usize>,
    /// Time of the Down sample.
    pub down_time: u64,
    /// Time of the latest Move sample (or Down).
    pub last_move_time: u64,
    /// Dwell on the current key.
    pub current_key_time: u64,
    /// Dwell on the last key.
    pub last_key_time: u64,
    /// Where the finger was when it left the last key.
    pub last_code_point: (i32, i32),
    /// Set when a long press consumed the gesture.
    pub aborted: bool,
}

impl Session {
    fn begin(key: Option<usize>, x: i32, y: i32, time: u64) -> Self {
        Self {
            current_key: key,
            last_key: None,
            down_time: time,
            last_move_time: time,
            current_key_time: 0,
            last_key_time: 0,
            last_code_point: (x, y),
            aborted: false,
        }
    }

    // The finger moved from the current key onto `key`.
    fn switch_to(&mut self, key: Option<usize>, time: u64) {
        self.last_key = self.current_key;
        self.last_key_time = self
            .current_key_time
            .saturating_add(time.saturating_sub(self.last_move_time));
        self.current_key = key;
        self.current_key_time = 0;
    }
}

/// Multi-tap bookkeeping. Survives across gestures.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiTap {
    /// Key most recently sent.
    pub last_sent: Option<usize>,
    /// Position in the current key's code cycle; `None` before the first send.
    pub tap_count: Option<usize>,
    /// When the last key was sent.
    pub last_tap_time: Option<u64>,
    /// Whether the current gesture is on a multi-code key.
    pub active: bool,
}

impl MultiTap {
    fn reset(&mut self) {
        *self = Self {
            tap_count: Some(0),
            ..Self::default()
        };
    }

    fn within(&self, time: u64, interval: u64) -> bool {
        self.last_tap_time
            .is_some_and(|t| time < t.saturating_add(interval))
    }

    fn elapsed(&self, time: u64, interval: u64) -> bool {
        self.last_tap_time
            .is_none_or(|t| time > t.saturating_add(interval))
    }
}

/// Drives gestures against a [`Keyboard`] and broadcasts to [`Listeners`].
///
/// Keys whose press state changed, plus the key under an Up, are queued for
/// redraw; drain them with [`take_invalidated`](Self::take_invalidated).
#[derive(Clone, Debug, Default)]
pub struct GestureMachine {
    tester: HitTester,
    timing: Timing,
    session: Session,
    multi_tap: MultiTap,
    press: PressTracker,
    repeat_key: Option<usize>,
    timers: TimerQueue<TimerKind>,
    repeat_timer: Option<TimerHandle>,
    long_press_timer: Option<TimerHandle>,
    last_point: (i32, i32),
    invalidated: Vec<usize>,
}

impl GestureMachine {
    /// An idle machine.
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    /// Gesture timeouts.
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Whether near misses count as hits.
    pub fn is_proximity_correction_enabled(&self) -> bool {
        self.tester.proximity_correction()
    }

    /// Turn proximity correction on or off.
    pub fn set_proximity_correction_enabled(&mut self, enabled: bool) {
        self.tester.set_proximity_correction(enabled);
    }

    /// The current gesture's state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Multi-tap state.
    pub fn multi_tap(&self) -> &MultiTap {
        &self.multi_tap
    }

    /// Key currently drawn pressed.
    pub fn pressed_key(&self) -> Option<usize> {
        self.press.current()
    }

    /// Key being repeated, if any.
    pub fn repeat_key(&self) -> Option<usize> {
        self.repeat_key
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_due()
    }

    /// Keys that need redrawing since the last call, in order, possibly repeated.
    pub fn take_invalidated(&mut self) -> Vec<usize> {
        core::mem::take(&mut self.invalidated)
    }

    /// Cancel both timers.
    pub fn cancel_timers(&mut self) {
        if let Some(h) = self.repeat_timer.take() {
            self.timers.cancel(h);
        }
        if let Some(h) = self.long_press_timer.take() {
            self.timers.cancel(h);
        }
        log::trace!("cancelled gesture timers");
    }

    /// Forget the gesture in progress and any press state, keeping configuration.
    pub fn reset(&mut self) {
        self.cancel_timers();
        self.timers.clear();
        self.session = Session::default();
        self.multi_tap = MultiTap::default();
        self.press = PressTracker::new();
        self.repeat_key = None;
        self.invalidated.clear();
    }

    /// Fire every timer due at or before `now`.
    pub fn advance(&mut self, keyboard: &mut Keyboard, listeners: &Listeners, now: u64) {
        while let Some((due, kind)) = self.timers.pop_due(now) {
            match kind {
                TimerKind::Repeat => {
                    self.repeat_timer = None;
                    self.fire_repeat(keyboard, listeners, due);
                }
                TimerKind::LongPress => {
                    self.long_press_timer = None;
                    self.fire_long_press(keyboard, listeners);
                }
            }
        }
    }

    /// Handle one touch sample at `(x, y)` in keyboard coordinates.
    ///
    /// Timers due at or before `time` fire first.
    pub fn handle_touch(
        &mut self,
        keyboard: &mut Keyboard,
        listeners: &Listeners,
        action: TouchAction,
        x: i32,
        y: i32,
        time: u64,
    ) {
        self.advance(keyboard, listeners, time);
        let key = self.tester.locate(keyboard, x, y);
        match action {
            TouchAction::Down => self.on_down(keyboard, listeners, key, x, y, time),
            TouchAction::Move => self.on_move(keyboard, key, time),
            TouchAction::Up => self.on_up(keyboard, listeners, key, x, y, time),
            TouchAction::Cancel => {}
        }
        self.last_point = (x, y);
    }

    fn on_down(
        &mut self,
        keyboard: &mut Keyboard,
        listeners: &Listeners,
        key: Option<usize>,
        x: i32,
        y: i32,
        time: u64,
    ) {
        self.session = Session::begin(key, x, y, time);
        self.check_multi_tap(keyboard, time, key);
        let code = key
            .and_then(|k| keyboard.key(k))
            .and_then(|k| k.primary_code())
            .unwrap_or(0);
        listeners.press(code);
        if let Some(k) = key.filter(|&k| keyboard.key(k).is_some_and(|k| k.repeatable)) {
            self.repeat_key = Some(k);
            self.send_repeat(keyboard, listeners, k, time);
            self.arm_repeat(time.saturating_add(self.timing.repeat_start_delay));
        }
        if key.is_some() {
            self.arm_long_press(time);
        }
        self.update_key_state(keyboard, key);
    }

    fn on_move(&mut self, keyboard: &mut Keyboard, key: Option<usize>, time: u64) {
        let mut continue_long_press = false;
        if let Some(k) = key {
            let s = &mut self.session;
            match s.current_key {
                None => {
                    s.current_key = Some(k);
                    s.current_key_time = time.saturating_sub(s.down_time);
                }
                Some(c) if c == k => {
                    s.current_key_time = s
                        .current_key_time
                        .saturating_add(time.saturating_sub(s.last_move_time));
                    continue_long_press = true;
                }
                Some(_) => {
                    self.multi_tap.reset();
                    s.last_code_point = self.last_point;
                    s.switch_to(key, time);
                }
            }
            if key != self.repeat_key {
                if let Some(h) = self.repeat_timer.take() {
                    self.timers.cancel(h);
                }
                self.repeat_key = None;
            }
        }
        if !continue_long_press {
            if let Some(h) = self.long_press_timer.take() {
                self.timers.cancel(h);
            }
            if key.is_some() {
                self.arm_long_press(time);
            }
        }
        self.session.last_move_time = time;
        self.update_key_state(keyboard, key);
    }

    fn on_up(
        &mut self,
        keyboard: &mut Keyboard,
        listeners: &Listeners,
        key: Option<usize>,
        x: i32,
        y: i32,
        time: u64,
    ) {
        self.cancel_timers();
        if key != self.session.current_key {
            self.multi_tap.reset();
            self.session.switch_to(key, time);
        }
        let (mut sx, mut sy) = (x, y);
        let s = &mut self.session;
        if s.current_key_time < s.last_key_time && s.last_key.is_some() {
            s.current_key = s.last_key;
            (sx, sy) = s.last_code_point;
        }
        self.update_key_state(keyboard, None);
        if self.repeat_key.is_none() && !self.session.aborted {
            let target = self.session.current_key;
            self.detect_and_send(keyboard, listeners, target, sx, sy, time);
        }
        if let Some(k) = key {
            self.invalidated.push(k);
        }
        self.repeat_key = None;
    }

    fn check_multi_tap(&mut self, keyboard: &Keyboard, time: u64, key: Option<usize>) {
        let Some(index) = key else {
            return;
        };
        let Some(code_count) = keyboard.key(index).map(|k| k.codes.len()) else {
            return;
        };
        let interval = self.timing.multi_tap_interval;
        let mt = &mut self.multi_tap;
        if code_count > 1 {
            mt.active = true;
            mt.tap_count = if mt.within(time, interval) && mt.last_sent == Some(index) {
                Some(mt.tap_count.map_or(0, |c| (c + 1) % code_count))
            } else {
                None
            };
            return;
        }
        if mt.elapsed(time, interval) || mt.last_sent != Some(index) {
            mt.reset();
        }
    }

    fn send_repeat(&mut self, keyboard: &mut Keyboard, listeners: &Listeners, key: usize, time: u64) {
        let Some((x, y)) = keyboard.key(key).map(|k| (k.bounds.x, k.bounds.y)) else {
            return;
        };
        self.detect_and_send(keyboard, listeners, Some(key), x, y, time);
    }

    /// Send `key`'s code, resolving multi-tap and the accept key.
    fn detect_and_send(
        &mut self,
        keyboard: &mut Keyboard,
        listeners: &Listeners,
        key: Option<usize>,
        x: i32,
        y: i32,
        time: u64,
    ) {
        let Some(index) = key else {
            return;
        };
        let Some(k) = keyboard.key(index) else {
            return;
        };
        let Some(primary) = k.primary_code() else {
            log::debug!("key {index} has no codes to send");
            return;
        };
        let codes = k.codes.clone();
        let (_, candidates) = self.tester.locate_with_candidates(keyboard, x, y);
        if keyboard.accept_code() == Some(primary) {
            listeners.f1_key(primary);
        }
        let mut code = primary;
        if self.multi_tap.active {
            let count = match self.multi_tap.tap_count {
                Some(count) => {
                    listeners.key(KEYCODE_DELETE, &KEY_DELETE);
                    count
                }
                None => {
                    self.multi_tap.tap_count = Some(0);
                    0
                }
            };
            code = codes.get(count).copied().unwrap_or(primary);
        }
        log::debug!("sending key {index} code {code}");
        listeners.key(code, candidates.as_slice());
        listeners.release(code);
        self.multi_tap.last_sent = Some(index);
        self.multi_tap.last_tap_time = Some(time);
    }

    fn fire_repeat(&mut self, keyboard: &mut Keyboard, listeners: &Listeners, due: u64) {
        let Some(key) = self.repeat_key else {
            return;
        };
        self.send_repeat(keyboard, listeners, key, due);
        // Repeating stops once the next repeat would not be later than this one.
        let next = due.saturating_add(self.timing.repeat_interval);
        if next > due {
            self.arm_repeat(next);
        }
    }

    fn fire_long_press(&mut self, keyboard: &mut Keyboard, listeners: &Listeners) {
        let Some(code) = self
            .session
            .current_key
            .and_then(|k| keyboard.key(k))
            .and_then(|k| k.primary_code())
        else {
            return;
        };
        if listeners.long_press(code) {
            log::debug!("long press on code {code} consumed the gesture");
            self.session.aborted = true;
            self.update_key_state(keyboard, None);
        }
    }

    fn arm_repeat(&mut self, due: u64) {
        if let Some(h) = self.repeat_timer.take() {
            self.timers.cancel(h);
        }
        log::trace!("repeat due at {due}");
        self.repeat_timer = Some(self.timers.schedule(due, TimerKind::Repeat));
    }

    fn arm_long_press(&mut self, now: u64) {
        if let Some(h) = self.long_press_timer.take() {
            self.timers.cancel(h);
        }
        let due = now.saturating_add(self.timing.long_press_timeout);
        log::trace!("long press due at {due}");
        self.long_press_timer = Some(self.timers.schedule(due, TimerKind::LongPress));
    }

    fn update_key_state(&mut self, keyboard: &mut Keyboard, key: Option<usize>) {
        for event in self.press.update(key) {
            match event {
                PressEvent::Release(k) => {
                    if keyboard.set_pressed(k, false) {
                        self.invalidated.push(k);
                    }
                }
                PressEvent::Press(k) => {
                    if keyboard.set_pressed(k, true) {
                        self.invalidated.push(k);
                    }
                }
            }
        }
    }
}
