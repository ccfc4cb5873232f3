//! Streaming sequence-matching strategies
//!
//! This crate tracks whether the most recently seen inputs of an unbounded
//! value stream equal a caller-owned target sequence, delivering inputs one
//! at a time with no buffering of the stream itself. A registered listener
//! fires exactly on each transition into or out of the matched state.
//!
//! Two strategies implement the same [`SequenceMatcher`] contract:
//!
//! - [`IncrementalMatcher`]: a single progress cursor, O(1) work per input
//!   and no history buffer. Mismatches restart the cursor at the head of the
//!   target, so it can miss occurrences of self-overlapping targets.
//! - [`WindowedMatcher`]: a fixed-capacity ring of recent inputs, re-compared
//!   against the target after every input. O(len) work per input and
//!   O(capacity) memory, exact for any target up to the ring capacity.
//!
//! Both are single-threaded by design; a matcher owns its cursor or ring
//! exclusively and callers supply their own exclusion if they share one
//! across threads.
//!
//! # Example
//!
//! ```rust
//! use tailmatch_core::IncrementalMatcher;
//!
//! // Detect the CSI escape introducer in a byte stream.
//! let pattern = [0x1b, b'['];
//! let mut matcher = IncrementalMatcher::new();
//! matcher.configure(&pattern);
//!
//! matcher.process(b'x');
//! matcher.process(0x1b);
//! assert!(!matcher.is_matched());
//! matcher.process(b'[');
//! assert!(matcher.is_matched());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod incremental;
pub mod observer;
pub mod traits;
pub mod windowed;

pub use error::{CoreError, Result};
pub use incremental::IncrementalMatcher;
pub use observer::{Listener, ObserverSlot, Transition};
pub use traits::SequenceMatcher;
pub use windowed::WindowedMatcher;
