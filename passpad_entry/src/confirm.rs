// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Confirming a typed passcode against one handed over from an earlier step.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use passpad_gesture::{KeyboardActionListener, KeyboardView, ListenerId};

use crate::field::PassCodeField;

/// Accept code the confirm step installs on the keypad.
pub const CONFIRM_CODE: i32 = 0x1000;

/// Label of the confirm step's accept key.
pub const CONFIRM_LABEL: &str = "OK";

/// What the previous step hands to the confirm step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Handoff {
    /// The passcode chosen earlier, if any.
    pub stored_code: Option<String>,
}

impl Handoff {
    /// A handoff carrying `code`.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            stored_code: Some(code.into()),
        }
    }
}

/// Result of pressing the accept key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The field is full and equals the stored code.
    Match,
    /// The field is full but differs from the stored code, or nothing was stored.
    Mismatch,
    /// The field is not full yet.
    Incomplete,
}

type OutcomeFn = Rc<dyn Fn(Outcome)>;

struct FlowState {
    handoff: Handoff,
    last_outcome: Option<Outcome>,
    on_outcome: Option<OutcomeFn>,
}

/// Checks the field against the handed-over code when the accept key is pressed.
///
/// Cloning yields another handle to the same flow.
#[derive(Clone)]
pub struct ConfirmFlow {
    field: PassCodeField,
    accept_code: i32,
    state: Rc<RefCell<FlowState>>,
}

impl fmt::Debug for ConfirmFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ConfirmFlow")
            .field("field", &self.field)
            .field("accept_code", &self.accept_code)
            .field("last_outcome", &state.last_outcome)
            .finish_non_exhaustive()
    }
}

impl ConfirmFlow {
    /// A flow confirming `field` against `handoff` on [`CONFIRM_CODE`].
    pub fn new(field: PassCodeField, handoff: Handoff) -> Self {
        Self::with_accept_code(field, handoff, CONFIRM_CODE)
    }

    /// A flow confirming on a custom accept code.
    pub fn with_accept_code(field: PassCodeField, handoff: Handoff, accept_code: i32) -> Self {
        Self {
            field,
            accept_code,
            state: Rc::new(RefCell::new(FlowState {
                handoff,
                last_outcome: None,
                on_outcome: None,
            })),
        }
    }

    /// The field being confirmed.
    pub fn field(&self) -> &PassCodeField {
        &self.field
    }

    /// The code that triggers a check.
    pub fn accept_code(&self) -> i32 {
        self.accept_code
    }

    /// The handoff in effect.
    pub fn handoff(&self) -> Handoff {
        self.state.borrow().handoff.clone()
    }

    /// Replace the handoff, e.g. when the previous step runs again.
    pub fn set_handoff(&self, handoff: Handoff) {
        let mut state = self.state.borrow_mut();
        state.handoff = handoff;
        state.last_outcome = None;
    }

    /// The outcome of the latest check.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.state.borrow().last_outcome
    }

    /// Run `callback` after every check.
    pub fn set_on_outcome(&self, callback: impl Fn(Outcome) + 'static) {
        self.state.borrow_mut().on_outcome = Some(Rc::new(callback));
    }

    /// Compare the field with the stored code and report the outcome.
    pub fn check(&self) -> Outcome {
        let outcome = if !self.field.is_complete() {
            Outcome::Incomplete
        } else {
            let text = self.field.text();
            match &self.state.borrow().handoff.stored_code {
                Some(stored) if *stored == text => Outcome::Match,
                _ => Outcome::Mismatch,
            }
        };
        log::debug!("passcode confirmation: {outcome:?}");
        let callback = {
            let mut state = self.state.borrow_mut();
            state.last_outcome = Some(outcome);
            state.on_outcome.clone()
        };
        if let Some(callback) = callback {
            callback(outcome);
        }
        outcome
    }

    /// Wire the flow into `view`: install the `OK` accept key and register the field
    /// and the flow as listeners, field first.
    pub fn attach(&self, view: &mut KeyboardView) -> (ListenerId, ListenerId) {
        view.set_accept_key(CONFIRM_LABEL, &[self.accept_code]);
        let field = self.field.attach(view);
        let flow = view.add_listener(Rc::new(self.clone()));
        (field, flow)
    }
}

impl KeyboardActionListener for ConfirmFlow {
    fn on_f1_key(&self, code: i32) {
        if code == self.accept_code {
            self.check();
        }
    }
}
