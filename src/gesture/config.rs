//! Timing configuration for gesture classification.

use std::time::Duration;

use crate::constants::{
    DEFAULT_DOUBLE_TAP_TIMEOUT, DEFAULT_LONG_PRESS_DELAY, DEFAULT_REPEAT_DELAY,
    DEFAULT_REPEAT_INTERVAL,
};

/// Immutable timing knobs, fixed when the classifier is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// Time a press must be held before it counts as a long press.
    pub long_press_delay: Duration,
    /// Maximum time between two releases for them to count as a double tap.
    pub double_tap_timeout: Duration,
    /// Time a press must be held before the repeat action arms.
    pub repeat_delay: Duration,
    /// Cadence of the repeat action once armed.
    pub repeat_interval: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_delay: DEFAULT_LONG_PRESS_DELAY,
            double_tap_timeout: DEFAULT_DOUBLE_TAP_TIMEOUT,
            repeat_delay: DEFAULT_REPEAT_DELAY,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_long_press_delay(mut self, delay: Duration) -> Self {
        self.long_press_delay = delay;
        self
    }

    pub fn with_double_tap_timeout(mut self, timeout: Duration) -> Self {
        self.double_tap_timeout = timeout;
        self
    }

    pub fn with_repeat_delay(mut self, delay: Duration) -> Self {
        self.repeat_delay = delay;
        self
    }

    pub fn with_repeat_interval(mut self, interval: Duration) -> Self {
        self.repeat_interval = interval;
        self
    }
}
