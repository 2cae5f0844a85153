//! Configuration types.

use std::time::Duration;

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Lower bound of the simulated "thinking" pause after each submission.
    pub thinking_delay_min: Duration,
    /// Upper bound of the simulated "thinking" pause.
    pub thinking_delay_max: Duration,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            thinking_delay_min: Duration::from_millis(1000),
            thinking_delay_max: Duration::from_millis(1500),
        }
    }
}
