#![forbid(unsafe_code)]

//! Engine configuration.

use std::fmt;
use std::ops::Range;
use std::time::Duration;

/// Tunable parameters for the visualization engine.
///
/// Defaults mirror the classic 800×600 visualizer: 100 bars, values that
/// fit a 600-pixel viewport with a margin, and a 50 ms pacing interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of elements in the array.
    pub array_size: usize,
    /// Half-open range values are drawn from on generation/reset.
    pub value_range: Range<i32>,
    /// Pacing interval: how long the worker sleeps after each step event.
    /// `Duration::ZERO` disables pacing (useful for tests).
    pub delay: Duration,
}

impl EngineConfig {
    /// Default number of elements.
    pub const DEFAULT_ARRAY_SIZE: usize = 100;
    /// Default value range (viewport height minus margins).
    pub const DEFAULT_VALUE_RANGE: Range<i32> = 20..570;
    /// Default pacing interval.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

    /// Set the array size.
    pub fn with_array_size(mut self, array_size: usize) -> Self {
        self.array_size = array_size;
        self
    }

    /// Set the value range.
    pub fn with_value_range(mut self, value_range: Range<i32>) -> Self {
        self.value_range = value_range;
        self
    }

    /// Set the pacing interval.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Check the configuration for values that make generation impossible.
    ///
    /// A zero `array_size` is legal (an empty array sorts trivially with
    /// zero events); an empty `value_range` is not, since no value could
    /// ever be drawn from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value_range.is_empty() {
            return Err(ConfigError::EmptyValueRange {
                start: self.value_range.start,
                end: self.value_range.end,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            array_size: Self::DEFAULT_ARRAY_SIZE,
            value_range: Self::DEFAULT_VALUE_RANGE,
            delay: Self::DEFAULT_DELAY,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `value_range` contains no values.
    EmptyValueRange { start: i32, end: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValueRange { start, end } => {
                write!(f, "value range {start}..{end} contains no values")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
