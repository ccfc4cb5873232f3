//! Cursor-based streaming matcher with O(1) work per input
//!
//! Keeps a single cursor into the target sequence and advances or restarts it
//! on each input, so an arbitrarily long stream is matched with no history
//! buffer at all. The trade-off is a naive restart policy: on a mismatch the
//! cursor falls back to the head of the target and re-examines only the
//! current input, never the longest still-valid prefix of what came before.
//! Targets whose proper prefix is also a proper suffix (e.g. `[1, 1, 2]`
//! inside `[1, 1, 1, 2]`) can therefore be missed. Callers that need exact
//! matching for self-overlapping targets should use
//! [`WindowedMatcher`](crate::windowed::WindowedMatcher) instead.

use crate::observer::{Listener, ObserverSlot, Transition};
use crate::traits::SequenceMatcher;
use core::fmt;

/// Streaming matcher that tracks the target with a single progress cursor
///
/// Construction yields an unconfigured matcher: no target, no listener,
/// permanently unmatched. A target configured with zero length behaves the
/// same as no target at all.
///
/// Unlike the windowed strategy, `configure` here has no immediately
/// observable effect: the matched state is derived from the cursor on demand,
/// and the listener can only fire from within [`process`](Self::process).
pub struct IncrementalMatcher<'seq, T> {
    /// Target sequence, borrowed from the caller
    target: Option<&'seq [T]>,
    /// Number of leading target elements matched by the current stream tail
    cursor: usize,
    /// Transition listener slot
    observer: ObserverSlot<T>,
}

impl<'seq, T: PartialEq> IncrementalMatcher<'seq, T> {
    /// Create an unconfigured matcher
    pub fn new() -> Self {
        Self {
            target: None,
            cursor: 0,
            observer: ObserverSlot::new(),
        }
    }

    /// Replace the tracked target sequence
    ///
    /// Resets the cursor, discarding any partial progress against the
    /// previous target. Does not recompute state or notify; the next
    /// [`process`](Self::process) call observes the new target.
    pub fn configure(&mut self, target: &'seq [T]) {
        self.target = Some(target);
        self.cursor = 0;
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
    /// Advances the cursor if `input` continues the target; otherwise
    /// restarts at the head, keeping the current input if it opens a new
    /// occurrence. A completed match restarts fresh on the next input rather
    /// than extending into overlap. Fires the listener if and only if the
    /// matched state changed. No-op while unconfigured or configured with an
    /// empty target.
    pub fn process(&mut self, input: T) {
        let Some(target) = self.target else {
            return;
        };
        if target.is_empty() {
            return;
        }

        let old_state = self.is_matched();

        if self.cursor == target.len() {
            self.cursor = 0;
        }
        self.cursor = if target[self.cursor] == input {
            self.cursor + 1
        } else if target[0] == input {
            1
        } else {
            0
        };

        if old_state != self.is_matched() {
            self.notify();
        }
    }

    /// Whether the most recent inputs equal the target sequence
    pub fn is_matched(&self) -> bool {
        match self.target {
            Some(target) => !target.is_empty() && self.cursor == target.len(),
            None => false,
        }
    }

    /// Invoke the listener with the current state, if one is attached
    pub fn notify(&mut self) {
        let matched = self.is_matched();
        let target = self.target.unwrap_or(&[]);
        self.observer.emit(Transition::new(matched, target));
    }
}

impl<T: PartialEq> Default for IncrementalMatcher<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IncrementalMatcher<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementalMatcher")
            .field("target", &self.target)
            .field("cursor", &self.cursor)
            .field("observer", &self.observer)
            .finish()
    }
}

impl<'seq, T: PartialEq> SequenceMatcher<'seq, T> for IncrementalMatcher<'seq, T> {
    fn configure(&mut self, target: &'seq [T]) {
        IncrementalMatcher::configure(self, target);
    }

    fn observe(&mut self, listener: Listener<T>) {
        IncrementalMatcher::observe(self, listener);
    }

    fn detach(&mut self) {
        IncrementalMatcher::detach(self);
    }

    fn process(&mut self, input: T) {
        IncrementalMatcher::process(self, input);
    }

    fn is_matched(&self) -> bool {
        IncrementalMatcher::is_matched(self)
    }

    fn name(&self) -> &'static str {
        "incremental"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recording_listener(log: &Rc<RefCell<Vec<bool>>>) -> Listener<i32> {
        let log = Rc::clone(log);
        Box::new(move |transition| log.borrow_mut().push(transition.is_matched()))
    }

    #[test]
    fn test_match_after_false_start() {
        // target [1,2,3] against stream [1,2,1,2,3]: the third input restarts
        // the cursor, the tail still completes the match.
        let target = [1, 2, 3];
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut matcher = IncrementalMatcher::new();
        matcher.configure(&target);
        matcher.observe(recording_listener(&log));

        let mut states = Vec::new();
        for input in [1, 2, 1, 2, 3] {
            matcher.process(input);
            states.push(matcher.is_matched());
        }

        assert_eq!(states, [false, false, false, false, true]);
        assert_eq!(*log.borrow(), [true]);
    }

    #[test]
    fn test_self_overlapping_target_is_missed() {
        // The restart keeps only the current input: the still-valid [1,1]
        // prefix is dropped when the third 1 mismatches the expected 2, so
        // [1,1,2] is never found in [1,1,1,2].
        let target = [1, 1, 2];
        let mut matcher = IncrementalMatcher::new();
        matcher.configure(&target);

        for input in [1, 1, 1, 2] {
            matcher.process(input);
            assert!(!matcher.is_matched());
        }
    }

    #[test]
    fn test_completed_match_restarts_fresh() {
        let target = [1, 2, 3];
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut matcher = IncrementalMatcher::new();
        matcher.configure(&target);
        matcher.observe(recording_listener(&log));

        for input in [1, 2, 3, 1, 2, 3] {
            matcher.process(input);
        }

        assert!(matcher.is_matched());
        // up at the first 3, down at the following 1, up again at the last 3
        assert_eq!(*log.borrow(), [true, false, true]);
    }

    #[test]
    fn test_unconfigured_is_permanently_false() {
        let mut matcher: IncrementalMatcher<'_, i32> = IncrementalMatcher::new();
        assert!(!matcher.is_matched());

        for input in [1, 2, 3] {
            matcher.process(input);
            assert!(!matcher.is_matched());
        }
    }

    #[test]
    fn test_empty_target_is_permanently_false() {
        let target: [i32; 0] = [];
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut matcher = IncrementalMatcher::new();
        matcher.configure(&target);
        matcher.observe(recording_listener(&log));

        for input in [0, 1, 2] {
            matcher.process(input);
            assert!(!matcher.is_matched());
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_configure_resets_progress_without_notifying() {
        let first = [1, 2, 3];
        let second = [3, 4];
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut matcher = IncrementalMatcher::new();
        matcher.configure(&first);
        matcher.observe(recording_listener(&log));

        for input in [1, 2, 3] {
            matcher.process(input);
        }
        assert!(matcher.is_matched());

        // Reconfiguring drops the matched state silently; the cursor does not
        // carry over into the new target.
        matcher.configure(&second);
        assert!(!matcher.is_matched());
        assert_eq!(*log.borrow(), [true]);

        matcher.process(3);
        matcher.process(4);
        assert!(matcher.is_matched());
        assert_eq!(*log.borrow(), [true, true]);
    }

    #[test]
    fn test_restart_keeps_input_that_opens_an_occurrence() {
        // The mismatching input is re-examined at the head: the second 5 both
        // breaks the old partial match and starts the one that completes.
        let target = [5, 6];
        let mut matcher = IncrementalMatcher::new();
        matcher.configure(&target);

        matcher.process(5);
        matcher.process(5);
        assert!(!matcher.is_matched());
        matcher.process(6);
        assert!(matcher.is_matched());
    }

    #[test]
    fn test_notify_reports_current_state() {
        let target = [7];
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut matcher = IncrementalMatcher::new();
        matcher.configure(&target);
        matcher.observe(recording_listener(&log));

        // Explicit notify is unconditional, independent of any transition.
        matcher.notify();
        matcher.process(7);
        matcher.notify();

        assert_eq!(*log.borrow(), [false, true, true]);
    }
}
