//! Simulated processing delays for the mock endpoints.

use std::time::Duration;

use crate::config::LatencyConfig;

/// Scales, or skips, the artificial delays mock endpoints pretend to spend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    scale: f64,
}

impl Latency {
    /// Delays multiplied by `scale`. Non-positive or non-finite scales disable them.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 0.0 };
        Self { scale }
    }

    /// No delays at all.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0.0)
    }

    /// Build from configuration; `enabled` already folds in env and CLI overrides.
    #[must_use]
    pub fn from_config(config: &LatencyConfig, enabled: bool) -> Self {
        if enabled {
            Self::new(config.scale)
        } else {
            Self::disabled()
        }
    }

    /// How long a simulated `seconds` of work actually sleeps.
    #[must_use]
    pub fn duration(self, seconds: f64) -> Duration {
        let scaled = seconds * self.scale;
        if scaled.is_finite() && scaled > 0.0 {
            Duration::try_from_secs_f64(scaled).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        }
    }

    /// Sleep for a simulated `seconds` of work.
    pub async fn pause(self, seconds: f64) {
        let duration = self.duration(seconds);
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_delays() {
        assert_eq!(Latency::new(1.0).duration(1.5), Duration::from_millis(1500));
        assert_eq!(Latency::new(0.5).duration(2.0), Duration::from_secs(1));
    }

    #[test]
    fn disabled_never_sleeps() {
        assert_eq!(Latency::disabled().duration(2.0), Duration::ZERO);
        assert_eq!(Latency::new(-1.0).duration(2.0), Duration::ZERO);
        assert_eq!(Latency::new(f64::NAN).duration(2.0), Duration::ZERO);
    }

    #[test]
    fn from_config_respects_enabled_flag() {
        let config = LatencyConfig { enabled: true, scale: 2.0 };
        assert_eq!(Latency::from_config(&config, true).duration(1.0), Duration::from_secs(2));
        assert_eq!(Latency::from_config(&config, false).duration(1.0), Duration::ZERO);
    }

    #[tokio::test]
    async fn disabled_pause_returns_immediately() {
        let started = std::time::Instant::now();
        Latency::disabled().pause(5.0).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
