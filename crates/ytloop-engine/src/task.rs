//! Abort-on-drop task guards.

use std::future::Future;

use tokio::task::JoinHandle;

/// Handle to a spawned background task that is cancelled when the guard
/// goes away.
///
/// Session timers must never outlive the session that created them;
/// tying them to a guard makes cancellation total whether the session is
/// replaced, torn down, or simply dropped.
#[derive(Debug)]
pub(crate) struct TaskGuard {
    handle: JoinHandle<()>,
}

impl TaskGuard {
    /// Spawn a task tied to the returned guard.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Cancel the task now.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let ticks = Arc::new(AtomicU32::new(0));
        let seen = ticks.clone();

        let guard = TaskGuard::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(10)).await;
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(35)).await;
        let before = ticks.load(Ordering::SeqCst);
        assert!(before >= 3);

        drop(guard);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_task() {
        let ticks = Arc::new(AtomicU32::new(0));
        let seen = ticks.clone();

        let guard = TaskGuard::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(10)).await;
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(15)).await;
        guard.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }
}
