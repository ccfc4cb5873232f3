//! High-level tracker configuration

use crate::error::{ApiError, Result};

/// Matching strategy selection
///
/// The two strategies satisfy the same contract but are not behaviorally
/// identical; see the crate-level documentation for the trade-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Cursor-based matching: O(1) per input, no history buffer, may miss
    /// occurrences of self-overlapping targets
    Incremental,
    /// Ring-buffer matching: O(target length) per input, exact for any
    /// target up to `capacity` elements
    Windowed {
        /// History capacity; a hard ceiling on trackable target length
        capacity: usize,
    },
}

impl Strategy {
    /// Strategy name for debugging and logging
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Incremental => "incremental",
            Strategy::Windowed { .. } => "windowed",
        }
    }
}

/// High-level configuration for a [`Tracker`](crate::Tracker)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Incremental,
        }
    }
}

impl Config {
    /// Create an incremental-strategy configuration
    pub fn incremental() -> Self {
        Self::default()
    }

    /// Create a windowed-strategy configuration with the given capacity
    pub fn windowed(capacity: usize) -> Self {
        Self {
            strategy: Strategy::Windowed { capacity },
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Selected strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    strategy: Option<Strategy>,
}

impl ConfigBuilder {
    /// Set the strategy explicitly
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Use the incremental strategy
    pub fn incremental(mut self) -> Self {
        self.strategy = Some(Strategy::Incremental);
        self
    }

    /// Use the windowed strategy with the given capacity
    pub fn windowed(mut self, capacity: usize) -> Self {
        self.strategy = Some(Strategy::Windowed { capacity });
        self
    }

    /// Build the configuration
    ///
    /// Rejects a windowed capacity of zero, which the core would refuse at
    /// tracker construction anyway; everything else is accepted as-is.
    pub fn build(self) -> Result<Config> {
        let strategy = self.strategy.unwrap_or(Strategy::Incremental);

        if let Strategy::Windowed { capacity: 0 } = strategy {
            return Err(ApiError::Config(
                "windowed capacity must be at least 1".to_string(),
            ));
        }

        Ok(Config { strategy })
    }
}
