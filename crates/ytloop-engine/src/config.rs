//! Engine configuration.

use std::time::Duration;

/// Loop-engine tunables.
///
/// Defaults: a 250 ms segment sampler with a 150 ms end guard, and a
/// 200 ms duration probe bounded at 25 attempts (about five seconds).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Segment sampler tick interval
    pub sample_interval: Duration,
    /// Guard subtracted from the loop end so coarse sampling cannot
    /// overshoot past the boundary before the next tick
    pub end_epsilon_secs: f64,
    /// Delay between duration probe attempts
    pub duration_poll_interval: Duration,
    /// Maximum duration probe attempts before giving up
    pub duration_poll_attempts: u32,
    /// Mute and start playback as soon as a video is loaded
    pub autoplay_muted: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_millis(250),
            end_epsilon_secs: 0.15,
            duration_poll_interval: Duration::from_millis(200),
            duration_poll_attempts: 25,
            autoplay_muted: true,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            sample_interval: Duration::from_millis(
                std::env::var("YTLOOP_SAMPLE_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(250),
            ),
            end_epsilon_secs: std::env::var("YTLOOP_END_EPSILON_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(|ms| ms as f64 / 1000.0)
                .unwrap_or(0.15),
            duration_poll_interval: Duration::from_millis(
                std::env::var("YTLOOP_DURATION_POLL_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(200),
            ),
            duration_poll_attempts: std::env::var("YTLOOP_DURATION_POLL_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(25),
            autoplay_muted: std::env::var("YTLOOP_AUTOPLAY_MUTED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }
}
