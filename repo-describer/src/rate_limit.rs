//! Write pacing for the GitHub API.
//!
//! Writes are spaced by a fixed delay. The delay does not adapt to rate
//! limit headers.

use std::time::Duration;
use tracing::debug;

/// Pause after each write.
pub const WRITE_DELAY: Duration = Duration::from_secs(2);

/// Sleeps for `delay` after a write. A zero delay returns immediately.
pub async fn pause_after_write(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!(delay_ms = delay.as_millis() as u64, "Pausing after write");
    tokio::time::sleep(delay).await;
}
