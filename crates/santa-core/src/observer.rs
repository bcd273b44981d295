//! Observer pattern for attempt progress.
//!
//! The generator reports each attempt boundary through `ProgressObserver`.
//! Observers are effects only; they must never influence the result.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::progress::AttemptUpdate;

/// Observer trait for receiving attempt updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive an attempt update.
    fn on_attempt(&self, update: &AttemptUpdate);
}

/// Subject that fans an update out to a collection of observers.
pub struct ProgressSubject {
    observers: RwLock<Vec<Arc<dyn ProgressObserver>>>,
}

impl ProgressSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn ProgressObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl ProgressObserver for ProgressSubject {
    fn on_attempt(&self, update: &AttemptUpdate) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_attempt(update);
        }
    }
}

impl Default for ProgressSubject {
    fn default() -> Self {
        Self::new()
    }
}
