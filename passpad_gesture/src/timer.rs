// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-threaded delayed-message queue driven by a host clock.
//!
//! Nothing here reads a clock. The host reports the time with every touch event and
//! through [`KeyboardView::advance_to`](crate::KeyboardView::advance_to); due entries
//! are then popped in order and handled on the same thread.
//!
//! ## Ordering
//!
//! - Entries pop earliest-due first.
//! - Entries due at the same time pop in the order they were scheduled.
//! - Cancelling is idempotent; cancelling a popped or already-cancelled entry does nothing.

use alloc::vec::Vec;

/// Handle to a scheduled entry.
///
/// Handles are never reused within one queue, so a stale handle cannot cancel a
/// later entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    due: u64,
    seq: u64,
    payload: T,
}

/// Pending entries ordered by due time.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// An empty queue.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to become due at `due` (milliseconds).
    pub fn schedule(&mut self, due: u64, payload: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, payload });
        TimerHandle(seq)
    }

    /// Remove a pending entry. Returns whether anything was removed.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != handle.0);
        self.entries.len() != before
    }

    /// Whether the entry is still pending.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.seq == handle.0)
    }

    /// Pop the earliest entry due at or before `now`, with its due time.
    pub fn pop_due(&mut self, now: u64) -> Option<(u64, T)> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;
        let e = self.entries.swap_remove(pos);
        Some((e.due, e.payload))
    }

    /// Earliest due time, if anything is pending.
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(30, 'c');
        q.schedule(10, 'a');
        q.schedule(10, 'b');
        assert_eq!(q.next_due(), Some(10));
        assert_eq!(q.pop_due(5), None, "nothing is due yet");
        assert_eq!(q.pop_due(30), Some((10, 'a')));
        assert_eq!(q.pop_due(30), Some((10, 'b')));
        assert_eq!(q.pop_due(30), Some((30, 'c')));
        assert!(q.is_empty());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut q = TimerQueue::new();
        let h = q.schedule(10, ());
        let keep = q.schedule(20, ());
        assert!(q.is_pending(h));
        assert!(q.cancel(h));
        assert!(!q.cancel(h));
        assert!(!q.is_pending(h));
        assert!(q.is_pending(keep));
        assert_eq!(q.pop_due(100), Some((20, ())));
        assert!(!q.cancel(keep), "popped entries cannot be cancelled");
    }
}
