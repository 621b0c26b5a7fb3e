// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A length-limited passcode field fed by the keypad.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use passpad_gesture::{KeyboardActionListener, KeyboardView, ListenerId};
use passpad_keyboard::codes::{KEYCODE_CLEAR, KEYCODE_DELETE, code_to_digit};

use crate::error::FieldError;

/// Digits a fresh field accepts.
pub const DEFAULT_TARGET_LENGTH: usize = 4;

type CompleteFn = Rc<dyn Fn(&str)>;

struct FieldState {
    text: String,
    target_length: usize,
    on_complete: Option<CompleteFn>,
}

/// The passcode being typed.
///
/// Digits are appended until the field holds its target length; further digits are
/// dropped. Delete removes the last digit and the `Clear` accept code empties the
/// field. Whenever a change leaves the field exactly full, the completion callback
/// runs with the text.
///
/// Cloning yields another handle to the same field, so one clone can be registered
/// with a keypad while another is kept for reading.
#[derive(Clone)]
pub struct PassCodeField {
    inner: Rc<RefCell<FieldState>>,
}

impl fmt::Debug for PassCodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("PassCodeField")
            .field("len", &state.text.len())
            .field("target_length", &state.target_length)
            .finish_non_exhaustive()
    }
}

impl Default for PassCodeField {
    fn default() -> Self {
        Self::new()
    }
}

impl PassCodeField {
    /// An empty field expecting [`DEFAULT_TARGET_LENGTH`] digits.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FieldState {
                text: String::new(),
                target_length: DEFAULT_TARGET_LENGTH,
                on_complete: None,
            })),
        }
    }

    /// An empty field expecting `target_length` digits.
    pub fn with_target_length(target_length: usize) -> Result<Self, FieldError> {
        let field = Self::new();
        field.set_target_length(target_length)?;
        Ok(field)
    }

    /// The text typed so far.
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Number of digits typed so far.
    pub fn len(&self) -> usize {
        self.inner.borrow().text.len()
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().text.is_empty()
    }

    /// Digits the field accepts.
    pub fn target_length(&self) -> usize {
        self.inner.borrow().target_length
    }

    /// Change how many digits the field accepts.
    ///
    /// Text already typed is kept even if it is now longer than the target.
    pub fn set_target_length(&self, target_length: usize) -> Result<(), FieldError> {
        if target_length < 1 {
            return Err(FieldError::InvalidTargetLength(target_length));
        }
        self.inner.borrow_mut().target_length = target_length;
        Ok(())
    }

    /// Whether the field holds exactly its target length.
    pub fn is_complete(&self) -> bool {
        let state = self.inner.borrow();
        state.text.len() == state.target_length
    }

    /// Run `callback` with the text whenever a change leaves the field full.
    pub fn set_on_complete(&self, callback: impl Fn(&str) + 'static) {
        self.inner.borrow_mut().on_complete = Some(Rc::new(callback));
    }

    /// Drop the completion callback.
    pub fn clear_on_complete(&self) {
        self.inner.borrow_mut().on_complete = None;
    }

    /// Append a digit. Returns `false` if the field was already full.
    pub fn push_digit(&self, digit: char) -> bool {
        {
            let mut state = self.inner.borrow_mut();
            if state.text.len() >= state.target_length {
                log::trace!("passcode field full, dropping digit");
                return false;
            }
            state.text.push(digit);
        }
        self.changed();
        true
    }

    /// Remove the last digit. Returns `false` if the field was empty.
    pub fn delete_last(&self) -> bool {
        if self.inner.borrow_mut().text.pop().is_none() {
            return false;
        }
        self.changed();
        true
    }

    /// Empty the field.
    pub fn clear(&self) {
        let had_text = {
            let mut state = self.inner.borrow_mut();
            let had_text = !state.text.is_empty();
            state.text.clear();
            had_text
        };
        if had_text {
            self.changed();
        }
    }

    /// Register this field with `view` so its key events edit the text.
    pub fn attach(&self, view: &mut KeyboardView) -> ListenerId {
        view.add_listener(Rc::new(self.clone()))
    }

    // Callbacks run with no borrow held so they may read or edit the field.
    fn changed(&self) {
        let state = self.inner.borrow();
        if state.text.len() != state.target_length {
            return;
        }
        let Some(callback) = state.on_complete.clone() else {
            return;
        };
        let text = state.text.clone();
        drop(state);
        log::debug!("passcode field complete");
        callback(&text);
    }
}

impl KeyboardActionListener for PassCodeField {
    fn on_key(&self, code: i32, _candidates: &[i32]) {
        if code == KEYCODE_DELETE {
            self.delete_last();
        } else if let Some(digit) = code_to_digit(code) {
            self.push_digit(digit);
        }
    }

    fn on_f1_key(&self, code: i32) {
        if code == KEYCODE_CLEAR {
            self.clear();
        }
    }
}
