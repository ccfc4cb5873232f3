//! Ring-buffer matcher that re-derives the matched state after every input
//!
//! Keeps the most recent `capacity` inputs in a fixed-size circular history
//! and, after each input, compares the newest `len` entries against the
//! target sequence. Costs O(len) per input and O(capacity) memory, but is
//! exact for any target up to `capacity` elements, including the
//! self-overlapping targets the incremental strategy misses.

use crate::error::{CoreError, Result};
use crate::observer::{Listener, ObserverSlot, Transition};
use crate::traits::SequenceMatcher;
use alloc::vec::Vec;
use core::fmt;

/// Streaming matcher backed by a fixed-capacity history ring
///
/// The capacity is fixed at construction and is a hard ceiling on the length
/// of target the matcher can track: configuring a target longer than the
/// capacity is a caller contract violation, and while it never panics or
/// aborts, the resulting comparisons are meaningless. Size the ring to the
/// longest target the application will ever configure.
///
/// History slots start empty and only ever fill with processed inputs, so a
/// fresh matcher cannot spuriously match anything before `len` real inputs
/// have arrived. Inputs are recorded whether or not a target is configured,
/// and the history survives `configure`: setting a new target immediately
/// re-derives the matched state from the inputs already seen, firing the
/// listener if the cached state changes.
pub struct WindowedMatcher<'seq, T> {
    /// Target sequence, borrowed from the caller
    target: Option<&'seq [T]>,
    /// Circular history of the most recent inputs; `None` = never written
    history: Vec<Option<T>>,
    /// Next slot to write
    write_pos: usize,
    /// Cached matched state, re-derived after every input
    matched: bool,
    /// Transition listener slot
    observer: ObserverSlot<T>,
}

impl<'seq, T: PartialEq> WindowedMatcher<'seq, T> {
    /// Create an unconfigured matcher with the given history capacity
    ///
    /// Returns [`CoreError::ZeroCapacity`] for a zero capacity, which would
    /// leave the ring with nowhere to write.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CoreError::ZeroCapacity);
        }
        Ok(Self {
            target: None,
            history: (0..capacity).map(|_| None).collect(),
            write_pos: 0,
            matched: false,
            observer: ObserverSlot::new(),
        })
    }

    /// History capacity fixed at construction
    pub fn capacity(&self) -> usize {
        self.history.len()
    }

    /// Replace the tracked target sequence
    ///
    /// The history is retained: the matched state is immediately re-derived
    /// by comparing the new target against the inputs already recorded, and
    /// the listener fires if that changes the cached state.
    pub fn configure(&mut self, target: &'seq [T]) {
        self.target = Some(target);
        self.refresh();
    }

    /// Target currently being tracked, if any
    pub fn target(&self) -> Option<&'seq [T]> {
        self.target
    }

    /// Install a listener, replacing any previous one
    pub fn observe(&mut self, listener: Listener<T>) {
        self.observer.set(listener);
    }

    /// Remove the listener, if any
    pub fn detach(&mut self) {
        self.observer.clear();
    }

    /// Feed one input value
    ///
    /// Records the input in the ring (overwriting the oldest entry once the
    /// ring is full), re-derives the matched state, and fires the listener if
    /// and only if the state changed. Inputs are recorded even while no
    /// target is configured.
    pub fn process(&mut self, input: T) {
        let capacity = self.history.len();
        self.history[self.write_pos] = Some(input);
        self.write_pos = (self.write_pos + 1) % capacity;
        self.refresh();
    }

    /// Whether the most recent inputs equal the target sequence
    ///
    /// Returns the cached state in O(1); the comparison happens inside
    /// [`process`](Self::process) and [`configure`](Self::configure).
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Invoke the listener with the current state, if one is attached
    pub fn notify(&mut self) {
        let matched = self.matched;
        let target = self.target.unwrap_or(&[]);
        self.observer.emit(Transition::new(matched, target));
    }

    /// Re-derive the cached state, notifying on change
    fn refresh(&mut self) {
        let matched = self.recompute();
        if matched != self.matched {
            self.matched = matched;
            self.notify();
        }
    }

    /// Compare the newest `target.len()` history entries against the target
    fn recompute(&self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if target.is_empty() {
            return false;
        }

        let capacity = self.history.len();
        // Oldest slot of the compared window. Adding `capacity` before the
        // subtraction keeps the arithmetic in range; `% capacity` on the
        // target length makes an over-long target walk the ring without
        // underflow (its comparisons are meaningless, per the capacity
        // contract above).
        let start = (self.write_pos + capacity - target.len() % capacity) % capacity;
        target.iter().enumerate().all(|(offset, expected)| {
            self.history[(start + offset) % capacity].as_ref() == Some(expected)
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for WindowedMatcher<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedMatcher")
            .field("target", &self.target)
            .field("capacity", &self.history.len())
            .field("write_pos", &self.write_pos)
            .field("matched", &self.matched)
            .field("observer", &self.observer)
            .finish()
    }
}

impl<'seq, T: PartialEq> SequenceMatcher<'seq, T> for WindowedMatcher<'seq, T> {
    fn configure(&mut self, target: &'seq [T]) {
        WindowedMatcher::configure(self, target);
    }

    fn observe(&mut self, listener: Listener<T>) {
        WindowedMatcher::observe(self, listener);
    }

    fn detach(&mut self) {
        WindowedMatcher::detach(self);
    }

    fn process(&mut self, input: T) {
        WindowedMatcher::process(self, input);
    }

    fn is_matched(&self) -> bool {
        WindowedMatcher::is_matched(self)
    }

    fn name(&self) -> &'static str {
        "windowed"
    }
}
