use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime};

use tokio::time::{Instant, sleep};

use crate::config::WatchSettings;

/// Shared flag the caller trips to stop a pending wait
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    Changed,
    TimedOut,
    Cancelled,
}

/// Polls a file until it is written after a baseline time
pub struct FileWatcher {
    timeout: Duration,
    poll_interval: Duration,
    settle: Duration,
}

impl FileWatcher {
    pub fn new(settings: &WatchSettings) -> Self {
        Self {
            timeout: Duration::from_secs(settings.timeout_secs),
            poll_interval: Duration::from_millis(settings.poll_interval_ms),
            settle: Duration::from_millis(settings.settle_ms),
        }
    }

    pub fn with_durations(timeout: Duration, poll_interval: Duration, settle: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
            settle,
        }
    }

    /// Modification time to compare later writes against
    pub fn baseline(path: &Path) -> Option<SystemTime> {
        modified_time(path)
    }

    /// Wait until `path` is newer than `baseline`, the budget runs out, or
    /// `cancel` is tripped. After a change, waits a short settle delay so a
    /// writer still flushing the file can finish.
    pub async fn wait_for_change(
        &self,
        path: &Path,
        baseline: Option<SystemTime>,
        cancel: &CancelToken,
    ) -> WatchOutcome {
        let deadline = Instant::now() + self.timeout;

        loop {
            if cancel.is_cancelled() {
                return WatchOutcome::Cancelled;
            }

            if has_changed(path, baseline) {
                sleep(self.settle).await;
                return WatchOutcome::Changed;
            }

            let now = Instant::now();
            if now >= deadline {
                return WatchOutcome::TimedOut;
            }

            sleep(self.poll_interval.min(deadline - now)).await;
        }
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

fn has_changed(path: &Path, baseline: Option<SystemTime>) -> bool {
    match (modified_time(path), baseline) {
        (Some(current), Some(before)) => current > before,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
