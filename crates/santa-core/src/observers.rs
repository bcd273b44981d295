//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::constants::LOG_THROTTLE_MS;
use crate::observer::ProgressObserver;
use crate::progress::AttemptUpdate;

/// Observer that forwards updates through a channel without blocking.
///
/// A full channel drops the update; attempt counts are advisory and the
/// generator must never stall on a slow consumer.
pub struct ChannelObserver {
    sender: Sender<AttemptUpdate>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<AttemptUpdate>) -> Self {
        Self { sender }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_attempt(&self, update: &AttemptUpdate) {
        let _ = self.sender.try_send(*update);
    }
}

/// Observer that logs attempts via `tracing`, throttled by wall time.
pub struct LoggingObserver {
    min_interval_ms: u64,
    last_time: AtomicU64,
}

impl LoggingObserver {
    /// Create a logging observer with the given minimum interval.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_time: AtomicU64::new(0),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(LOG_THROTTLE_MS)
    }
}

impl ProgressObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_attempt(&self, update: &AttemptUpdate) {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        let last = self.last_time.load(Ordering::Relaxed);
        if !update.done && now.saturating_sub(last) < self.min_interval_ms {
            return;
        }

        if update.done {
            info!(attempts = update.attempt, "Valid assignment found");
        } else {
            debug!(
                attempt = update.attempt,
                max_attempts = update.max_attempts,
                "Trying permutation"
            );
        }
        self.last_time.store(now, Ordering::Relaxed);
    }
}

/// Observer that discards all updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_attempt(&self, _update: &AttemptUpdate) {
        // Intentionally empty
    }
}
