//! Shared contract satisfied by both matching strategies

use crate::observer::Listener;

/// Contract for streaming sequence matchers
///
/// Both strategies track whether the most recently processed inputs equal a
/// caller-owned target sequence, and fire the registered listener exactly on
/// each transition into or out of the matched state. The target is borrowed
/// for `'seq`; the caller keeps it alive for as long as the matcher is in use.
///
/// The strategies are deliberately not behaviorally identical. The
/// incremental cursor variant does O(1) work per input but misses occurrences
/// that would require backtracking into a self-overlapping prefix; the
/// windowed variant is exact for any target up to its ring capacity at O(len)
/// work per input. They also diverge on `configure` timing: see the
/// documentation of each implementation.
pub trait SequenceMatcher<'seq, T: PartialEq> {
    /// Replace the tracked target sequence, discarding matching progress
    fn configure(&mut self, target: &'seq [T]);

    /// Install a listener, replacing any previous one
    fn observe(&mut self, listener: Listener<T>);

    /// Remove the listener, if any
    fn detach(&mut self);

    /// Feed one input value; invokes the listener at most once
    fn process(&mut self, input: T);

    /// Current matched state, side-effect free
    fn is_matched(&self) -> bool;

    /// Strategy name for debugging and logging
    fn name(&self) -> &'static str;
}
