//! Single-slot listener plumbing for edge-triggered match notifications
//!
//! Matchers notify on state *transitions* only, never on every input. The
//! listener is a single replaceable slot; registering a new callback drops
//! the previous one.

use alloc::boxed::Box;
use core::fmt;

/// Read-only snapshot handed to a listener when the matched state flips
///
/// Carries everything a callback can observe about the matcher at the moment
/// of the transition: the new matched state and the target sequence being
/// tracked. The snapshot borrows the caller-owned target, not the matcher,
/// so the matcher itself stays mutable across the callback.
pub struct Transition<'a, T> {
    matched: bool,
    target: &'a [T],
}

impl<'a, T> Transition<'a, T> {
    pub(crate) fn new(matched: bool, target: &'a [T]) -> Self {
        Self { matched, target }
    }

    /// New matched state after the transition
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Target sequence the matcher is tracking
    pub fn target(&self) -> &'a [T] {
        self.target
    }
}

impl<T: fmt::Debug> fmt::Debug for Transition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("matched", &self.matched)
            .field("target_len", &self.target.len())
            .finish()
    }
}

/// Callback invoked on each transition into or out of the matched state
pub type Listener<T> = Box<dyn FnMut(Transition<'_, T>)>;

/// Holder for at most one listener
///
/// Setting a listener replaces the previous one; there is no multi-subscriber
/// fan-out. Emitting with no listener attached is a no-op.
pub struct ObserverSlot<T> {
    listener: Option<Listener<T>>,
}

impl<T> ObserverSlot<T> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self { listener: None }
    }

    /// Install a listener, replacing any previous one
    pub fn set(&mut self, listener: Listener<T>) {
        self.listener = Some(listener);
    }

    /// Remove the listener, if any
    pub fn clear(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is currently attached
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Invoke the listener with the given transition, if one is attached
    pub fn emit(&mut self, transition: Transition<'_, T>) {
        if let Some(listener) = self.listener.as_mut() {
            listener(transition);
        }
    }
}

impl<T> Default for ObserverSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObserverSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_empty_slot_emit_is_noop() {
        let mut slot: ObserverSlot<u8> = ObserverSlot::new();
        assert!(!slot.is_attached());
        slot.emit(Transition::new(true, &[1, 2]));
    }

    #[test]
    fn test_set_replaces_previous_listener() {
        let first = Rc::new(Cell::new(0usize));
        let second = Rc::new(Cell::new(0usize));

        let mut slot: ObserverSlot<u8> = ObserverSlot::new();

        let counter = Rc::clone(&first);
        slot.set(Box::new(move |_| counter.set(counter.get() + 1)));
        slot.emit(Transition::new(true, &[]));

        let counter = Rc::clone(&second);
        slot.set(Box::new(move |_| counter.set(counter.get() + 1)));
        slot.emit(Transition::new(false, &[]));
        slot.emit(Transition::new(true, &[]));

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_clear_detaches() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);

        let mut slot: ObserverSlot<u8> = ObserverSlot::new();
        slot.set(Box::new(move |_| counter.set(counter.get() + 1)));
        assert!(slot.is_attached());

        slot.clear();
        assert!(!slot.is_attached());
        slot.emit(Transition::new(true, &[]));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_transition_exposes_state_and_target() {
        let target = [3u8, 4, 5];
        let seen = Rc::new(Cell::new(false));
        let flag = Rc::clone(&seen);

        let mut slot: ObserverSlot<u8> = ObserverSlot::new();
        slot.set(Box::new(move |transition| {
            assert!(transition.is_matched());
            assert_eq!(transition.target().len(), 3);
            flag.set(true);
        }));
        slot.emit(Transition::new(true, &target));
        assert!(seen.get());
    }
}
