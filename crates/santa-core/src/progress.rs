//! Attempt progress types and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::generator::AssignError;

/// Progress update emitted at each attempt boundary.
///
/// An observer effect only: the update stream never influences the result.
#[derive(Debug, Clone, Copy)]
pub struct AttemptUpdate {
    /// Current attempt number, starting at 1.
    pub attempt: u32,
    /// Configured attempt bound.
    pub max_attempts: u32,
    /// Whether this update reports the successful final attempt.
    pub done: bool,
}

impl AttemptUpdate {
    /// Update for the start of an attempt.
    #[must_use]
    pub fn new(attempt: u32, max_attempts: u32) -> Self {
        Self {
            attempt,
            max_attempts,
            done: false,
        }
    }

    /// Update reporting that `attempt` produced a valid assignment.
    #[must_use]
    pub fn done(attempt: u32, max_attempts: u32) -> Self {
        Self {
            attempt,
            max_attempts,
            done: true,
        }
    }
}

/// Cooperative cancellation token checked between attempts.
///
/// # Example
/// ```
/// use santa_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation. All clones observe the request.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Error-returning check, for use with `?` at attempt boundaries.
    pub fn check_cancelled(&self, attempts: u32) -> Result<(), AssignError> {
        if self.is_cancelled() {
            Err(AssignError::Cancelled { attempts })
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
