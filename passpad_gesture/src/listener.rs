// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keyboard's event sink and the registry that broadcasts to it.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// Receives key events from the keypad.
///
/// Methods take `&self`; implementors that keep state use interior mutability.
/// Every method has an empty default so consumers implement only what they need.
pub trait KeyboardActionListener {
    /// A touch went down. `code` is the touched key's primary code, or `0` off-key.
    fn on_press(&self, code: i32) {
        let _ = code;
    }

    /// A key finished sending `code`.
    fn on_release(&self, code: i32) {
        let _ = code;
    }

    /// A key produced `code`. `candidates` ranks the codes of nearby keys, nearest first.
    fn on_key(&self, code: i32, candidates: &[i32]) {
        let _ = (code, candidates);
    }

    /// The accept key was sent.
    fn on_f1_key(&self, code: i32) {
        let _ = code;
    }

    /// A key was held past the long-press timeout. Return `true` to consume the gesture.
    fn on_long_press(&self, code: i32) -> bool {
        let _ = code;
        false
    }
}

/// Identifies a registered listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(ListenerId, Rc<dyn KeyboardActionListener>)>,
}

/// An ordered observer registry.
///
/// Listeners are notified in registration order. Each broadcast iterates a snapshot
/// taken before the first call, so a listener may add or remove listeners while it is
/// being notified; the change applies from the next broadcast on.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<Registry>>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Listeners {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener at the end of the notification order.
    pub fn add(&self, listener: Rc<dyn KeyboardActionListener>) -> ListenerId {
        let mut reg = self.inner.borrow_mut();
        let id = ListenerId(reg.next_id);
        reg.next_id += 1;
        reg.entries.push((id, listener));
        id
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut reg = self.inner.borrow_mut();
        let before = reg.entries.len();
        reg.entries.retain(|(i, _)| *i != id);
        reg.entries.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// True if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Vec<Rc<dyn KeyboardActionListener>> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect()
    }

    /// Broadcast [`KeyboardActionListener::on_press`].
    pub fn press(&self, code: i32) {
        for l in self.snapshot() {
            l.on_press(code);
        }
    }

    /// Broadcast [`KeyboardActionListener::on_release`].
    pub fn release(&self, code: i32) {
        for l in self.snapshot() {
            l.on_release(code);
        }
    }

    /// Broadcast [`KeyboardActionListener::on_key`].
    pub fn key(&self, code: i32, candidates: &[i32]) {
        for l in self.snapshot() {
            l.on_key(code, candidates);
        }
    }

    /// Broadcast [`KeyboardActionListener::on_f1_key`].
    pub fn f1_key(&self, code: i32) {
        for l in self.snapshot() {
            l.on_f1_key(code);
        }
    }

    /// Broadcast [`KeyboardActionListener::on_long_press`] to every listener.
    ///
    /// All listeners are asked even after one has handled it; the result is whether
    /// any did.
    pub fn long_press(&self, code: i32) -> bool {
        let mut handled = false;
        for l in self.snapshot() {
            handled |= l.on_long_press(code);
        }
        handled
    }
}
