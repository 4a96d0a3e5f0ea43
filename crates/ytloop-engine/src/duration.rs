//! Duration discovery.
//!
//! Freshly created players report a duration of zero until metadata
//! arrives, so the engine probes on a bounded schedule instead of
//! trusting the first reading. The result is always definite: a positive
//! duration or an explicit `Unknown`.

use std::sync::Arc;

use tracing::trace;

use ytloop_player::PlayerHandle;

use crate::config::EngineConfig;
use crate::poll::{poll_until, PollConfig, PollOutcome};

/// Definite result of duration discovery for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationOutcome {
    /// The player reported a positive duration.
    Known(f64),
    /// The probe budget ran out; segment looping stays disabled.
    Unknown,
}

impl DurationOutcome {
    pub fn is_known(&self) -> bool {
        matches!(self, DurationOutcome::Known(_))
    }

    /// The discovered duration, if any.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            DurationOutcome::Known(secs) => Some(*secs),
            DurationOutcome::Unknown => None,
        }
    }
}

/// Probe a player for its duration on the configured bounded schedule.
///
/// Player errors count as "not yet": a handle that keeps failing simply
/// exhausts the budget and yields `Unknown`.
pub(crate) async fn probe_duration(
    player: Arc<dyn PlayerHandle>,
    config: &EngineConfig,
) -> DurationOutcome {
    let poll = PollConfig::new("duration_probe")
        .with_interval(config.duration_poll_interval)
        .with_max_attempts(config.duration_poll_attempts);

    let outcome = poll_until(&poll, || {
        let player = Arc::clone(&player);
        async move {
            match player.duration().await {
                Ok(secs) if secs > 0.0 => Some(secs),
                Ok(_) => None,
                Err(error) => {
                    trace!(error = %error, "duration probe attempt failed");
                    None
                }
            }
        }
    })
    .await;

    match outcome {
        PollOutcome::Ready(secs) => DurationOutcome::Known(secs),
        PollOutcome::TimedOut { .. } => DurationOutcome::Unknown,
    }
}
