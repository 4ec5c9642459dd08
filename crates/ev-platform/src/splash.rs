//! Headless stand-in for the entry animation.

use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimer {
    duration: Duration,
}

impl SplashTimer {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(ms),
        }
    }

    /// Completes when playback would have finished.
    pub async fn finished(self) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
        debug!(duration_ms = self.duration.as_millis() as u64, "entry animation finished");
    }
}
