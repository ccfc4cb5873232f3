//! Public API for tailmatch streaming sequence detection
//!
//! This crate provides a stable interface over the matching strategies in
//! `tailmatch-core`: feed a [`Tracker`] one value at a time and it reports,
//! via polling or an edge-triggered listener, whether the most recent inputs
//! equal a configured target sequence. Typical use is spotting a fixed byte
//! or keyword pattern — a magic marker, an escape sequence, a command word —
//! inside an unbounded stream without buffering the stream.
//!
//! Two strategies are available behind one surface, selected by [`Config`]:
//! the incremental cursor (O(1) per input, can miss self-overlapping
//! targets) and the windowed ring buffer (O(target length) per input,
//! exact). The [`scan`] and [`contains`] conveniences cover the common
//! run-over-a-finite-stream case.
//!
//! # Example
//!
//! ```rust
//! use tailmatch_api::Tracker;
//!
//! let target = [0x1b, b'['];
//! let mut tracker = Tracker::incremental();
//! tracker.configure(&target);
//! tracker.observe(|transition| {
//!     if transition.is_matched() {
//!         println!("escape introducer seen");
//!     }
//! });
//!
//! for byte in [b'a', 0x1b, b'['] {
//!     tracker.process(byte);
//! }
//! assert!(tracker.is_matched());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use log::debug;
use tailmatch_core::{IncrementalMatcher, WindowedMatcher};

// Re-export key types
pub use config::{Config, ConfigBuilder, Strategy};
pub use dto::{Detection, ScanReport};
pub use error::{ApiError, Result};

// Re-export from core for convenience
pub use tailmatch_core::{CoreError, Listener, SequenceMatcher, Transition};

/// Main entry point for streaming sequence detection
///
/// A `Tracker` wraps one of the two core strategies, chosen at construction
/// by a [`Config`]. The target sequence is borrowed for `'seq` and never
/// copied; the caller keeps it alive for as long as the tracker is in use.
///
/// Trackers are single-threaded: each instance owns its cursor or ring
/// exclusively, and callers sharing one across threads must supply their own
/// mutual exclusion.
pub struct Tracker<'seq, T> {
    inner: Inner<'seq, T>,
    config: Config,
}

enum Inner<'seq, T> {
    Incremental(IncrementalMatcher<'seq, T>),
    Windowed(WindowedMatcher<'seq, T>),
}

impl<'seq, T: PartialEq> Tracker<'seq, T> {
    /// Create a tracker with the default configuration (incremental)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an incremental-strategy tracker
    pub fn incremental() -> Self {
        Self {
            inner: Inner::Incremental(IncrementalMatcher::new()),
            config: Config::incremental(),
        }
    }

    /// Create a windowed-strategy tracker with the given history capacity
    ///
    /// The capacity is a hard ceiling on trackable target length; see
    /// [`WindowedMatcher`] for the contract. Fails on a zero capacity.
    pub fn windowed(capacity: usize) -> Result<Self> {
        Self::with_config(Config::windowed(capacity))
    }

    /// Create a tracker with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        debug!("creating tracker with {} strategy", config.strategy().name());

        let inner = match config.strategy() {
            Strategy::Incremental => Inner::Incremental(IncrementalMatcher::new()),
            Strategy::Windowed { capacity } => {
                Inner::Windowed(WindowedMatcher::with_capacity(capacity)?)
            }
        };

        Ok(Self { inner, config })
    }

    /// Replace the tracked target sequence, discarding matching progress
    ///
    /// Timing differs by strategy: the incremental tracker defers any
    /// observable effect to the next [`process`](Self::process) call, while
    /// the windowed tracker re-derives its state against retained history
    /// immediately and may fire the listener from inside this call.
    pub fn configure(&mut self, target: &'seq [T]) {
        debug!(
            "tracker ({}) configured with {}-element target",
            self.strategy_name(),
            target.len()
        );
        match &mut self.inner {
            Inner::Incremental(matcher) => matcher.configure(target),
            Inner::Windowed(matcher) => matcher.configure(target),
        }
    }

    /// Install a listener, replacing any previous one
    ///
    /// The listener fires exactly on each transition into or out of the
    /// matched state, synchronously from inside the call that caused the
    /// transition, and receives a read-only [`Transition`] view.
    pub fn observe<F>(&mut self, listener: F)
    where
        F: FnMut(Transition<'_, T>) + 'static,
    {
        match &mut self.inner {
            Inner::Incremental(matcher) => matcher.observe(Box::new(listener)),
            Inner::Windowed(matcher) => matcher.observe(Box::new(listener)),
        }
    }

    /// Remove the listener, if any
    pub fn detach(&mut self) {
        match &mut self.inner {
            Inner::Incremental(matcher) => matcher.detach(),
            Inner::Windowed(matcher) => matcher.detach(),
        }
    }

    /// Feed one input value; invokes the listener at most once
    pub fn process(&mut self, input: T) {
        match &mut self.inner {
            Inner::Incremental(matcher) => matcher.process(input),
            Inner::Windowed(matcher) => matcher.process(input),
        }
    }

    /// Feed every value of an iterator, in order
    pub fn extend<I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = T>,
    {
        for input in inputs {
            self.process(input);
        }
    }

    /// Whether the most recent inputs equal the target sequence
    pub fn is_matched(&self) -> bool {
        match &self.inner {
            Inner::Incremental(matcher) => matcher.is_matched(),
            Inner::Windowed(matcher) => matcher.is_matched(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Name of the selected strategy
    pub fn strategy_name(&self) -> &'static str {
        self.config.strategy().name()
    }
}

impl<T: PartialEq> Default for Tracker<'_, T> {
    fn default() -> Self {
        Self::new().expect("default tracker creation should not fail")
    }
}

// Convenience functions

/// Scan a finite stream for every match of `target`
///
/// Uses the exact windowed strategy sized to the target, so self-overlapping
/// targets are found too. The report lists every offset at which the matcher
/// held the matched state after consuming an element; an empty target yields
/// an empty report.
///
/// ```rust
/// use tailmatch_api::scan;
///
/// let report = scan(&[2, 7], [1, 2, 7, 7, 2, 7]);
/// assert_eq!(report.first_offset(), Some(2));
/// assert_eq!(report.detections.len(), 2);
/// ```
pub fn scan<T, I>(target: &[T], stream: I) -> ScanReport
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut matcher = WindowedMatcher::with_capacity(target.len().max(1))
        .expect("scan capacity is always at least 1");
    matcher.configure(target);

    let mut detections = Vec::new();
    let mut items_processed = 0;
    for (offset, input) in stream.into_iter().enumerate() {
        matcher.process(input);
        items_processed += 1;
        if matcher.is_matched() {
            detections.push(Detection { offset });
        }
    }

    ScanReport {
        detections,
        items_processed,
    }
}

/// Whether `target` occurs anywhere in a finite stream
///
/// Exact (windowed) matching; stops consuming the stream at the first
/// occurrence. An empty target is never found.
pub fn contains<T, I>(target: &[T], stream: I) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut matcher = WindowedMatcher::with_capacity(target.len().max(1))
        .expect("contains capacity is always at least 1");
    matcher.configure(target);

    for input in stream {
        matcher.process(input);
        if matcher.is_matched() {
            return true;
        }
    }
    false
}
