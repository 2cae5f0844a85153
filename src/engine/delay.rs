//! Injectable "thinking" pause applied after each accepted submission.
//!
//! Presentation affordance only — flow correctness never depends on it.
//! The pause always completes; there are no timeout or cancellation
//! semantics.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::config::AssistConfig;

/// Pause policy invoked between a submission and its visible reply.
#[async_trait]
pub trait DelayPolicy: Send + Sync {
    async fn pause(&self);
}

/// Sleeps a uniformly jittered duration within a fixed window.
#[derive(Debug, Clone)]
pub struct ThinkingDelay {
    min: Duration,
    max: Duration,
}

impl ThinkingDelay {
    /// An inverted window collapses to `min`.
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn from_config(config: &AssistConfig) -> Self {
        Self::new(config.thinking_delay_min, config.thinking_delay_max)
    }
}

#[async_trait]
impl DelayPolicy for ThinkingDelay {
    async fn pause(&self) {
        let millis = {
            // The rng handle must not be held across the await.
            let mut rng = rand::thread_rng();
            rng.gen_range(self.min.as_millis() as u64..=self.max.as_millis() as u64)
        };
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}

/// No-op policy for tests and non-interactive callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl DelayPolicy for NoDelay {
    async fn pause(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_window_collapses_to_min() {
        let delay = ThinkingDelay::new(Duration::from_millis(500), Duration::from_millis(100));
        assert_eq!(delay.min, delay.max);
        assert_eq!(delay.min, Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn thinking_delay_sleeps_within_the_window() {
        let delay = ThinkingDelay::from_config(&AssistConfig::default());
        let before = tokio::time::Instant::now();
        delay.pause().await;
        let elapsed = before.elapsed();
        assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
        assert!(elapsed <= Duration::from_millis(1500) + Duration::from_millis(5));
    }

    #[tokio::test]
    async fn no_delay_returns_immediately() {
        NoDelay.pause().await;
    }
}
