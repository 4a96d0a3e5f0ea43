//! Bounded fixed-interval polling.
//!
//! Reusable probe pattern for readings that become available "soon" on an
//! external collaborator: ask, wait a fixed interval, ask again, give up
//! after a bounded number of attempts with a definite outcome either way.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// Configuration for a bounded poll.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between attempts.
    pub interval: Duration,
    /// Total number of attempts (at least one).
    pub max_attempts: u32,
    /// Operation name for logging.
    pub operation_name: String,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(200),
            max_attempts: 25,
            operation_name: "poll".to_string(),
        }
    }
}

impl PollConfig {
    /// Create a new poll config with the given operation name.
    pub fn new(operation_name: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            ..Default::default()
        }
    }

    /// Set the delay between attempts.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the total attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Definite result of a bounded poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome<T> {
    /// The probe produced a value.
    Ready(T),
    /// Every attempt came back empty.
    TimedOut { attempts: u32 },
}

impl<T> PollOutcome<T> {
    /// Returns true if the poll produced a value.
    pub fn is_ready(&self) -> bool {
        matches!(self, PollOutcome::Ready(_))
    }

    /// The value, if any.
    pub fn ready(self) -> Option<T> {
        match self {
            PollOutcome::Ready(value) => Some(value),
            PollOutcome::TimedOut { .. } => None,
        }
    }
}

/// Run a probe until it yields a value or the attempt budget is spent.
///
/// The probe is invoked immediately on the first attempt; the interval
/// only separates attempts. A probe that fails internally should map its
/// error to `None`; from the poll's perspective "errored" and "not yet"
/// are the same thing.
pub async fn poll_until<F, Fut, T>(config: &PollConfig, mut probe: F) -> PollOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let attempts = config.max_attempts.max(1);

    for attempt in 1..=attempts {
        if let Some(value) = probe().await {
            debug!(
                "{} ready after {} attempt(s)",
                config.operation_name, attempt
            );
            return PollOutcome::Ready(value);
        }
        if attempt < attempts {
            tokio::time::sleep(config.interval).await;
        }
    }

    PollOutcome::TimedOut { attempts }
}
