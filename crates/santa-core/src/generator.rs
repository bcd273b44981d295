//! The constrained cyclic assignment generator.
//!
//! Bounded rejection sampling: shuffle the roster, read the permutation as a
//! single cycle, reject on the first excluded edge, repeat up to the attempt
//! bound. Cycle structure is guaranteed by construction; only exclusions can
//! invalidate an attempt.

use std::time::Duration;

use crate::assignment::{Assignment, AssignmentEdge};
use crate::constants::{DEFAULT_MAX_ATTEMPTS, MIN_PARTICIPANTS};
use crate::observer::ProgressObserver;
use crate::participant::Roster;
use crate::progress::{AttemptUpdate, CancellationToken};
use crate::rng::{shuffle, RandomSource};

/// Error type for assignment generation.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    /// Fewer than two participants were supplied.
    #[error("at least 2 participants required, got {0}")]
    InsufficientParticipants(usize),

    /// Attempts exhausted without finding a valid assignment.
    ///
    /// Retriable: raise the bound or relax exclusions. A probabilistic
    /// signal, not a proof of infeasibility.
    #[error("no valid assignment found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    /// Generation was cancelled between attempts.
    #[error("generation cancelled after {attempts} attempts")]
    Cancelled { attempts: u32 },
}

/// Options for a generation call.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Attempt bound before giving up (0 = default).
    pub max_attempts: u32,
    /// Optional pause between attempts, so an interactive caller can render
    /// a live counter. Never affects the result.
    pub attempt_pause: Option<Duration>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt_pause: None,
        }
    }
}

impl GenerateOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_attempts == 0 {
            self.max_attempts = DEFAULT_MAX_ATTEMPTS;
        }
        self
    }
}

/// Generator producing single-cycle assignments under exclusion constraints.
pub struct CycleGenerator;

impl CycleGenerator {
    /// Create a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Attempt to produce a valid single-cycle assignment for `roster`.
    ///
    /// Attempts run strictly in order and stop at the first success. The
    /// observer is notified at every attempt boundary; cancellation is
    /// honored between attempts. The roster is never mutated.
    pub fn generate(
        &self,
        roster: &Roster,
        opts: &GenerateOptions,
        rng: &mut dyn RandomSource,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
    ) -> Result<Assignment, AssignError> {
        let n = roster.len();
        if n < MIN_PARTICIPANTS {
            return Err(AssignError::InsufficientParticipants(n));
        }
        let opts = opts.clone().normalize();

        // Positions into the roster slice; shuffled in place each attempt.
        let mut order: Vec<usize> = (0..n).collect();

        for attempt in 1..=opts.max_attempts {
            cancel.check_cancelled(attempt - 1)?;
            observer.on_attempt(&AttemptUpdate::new(attempt, opts.max_attempts));

            shuffle(&mut order, rng);
            if let Some(edges) = cycle_edges(roster, &order) {
                observer.on_attempt(&AttemptUpdate::done(attempt, opts.max_attempts));
                return Ok(Assignment::new(edges, attempt));
            }

            if let Some(pause) = opts.attempt_pause {
                std::thread::sleep(pause);
            }
        }

        Err(AssignError::Exhausted {
            attempts: opts.max_attempts,
        })
    }
}

impl Default for CycleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a position permutation as a cycle and collect its edges.
///
/// Returns `None` on the first edge whose receiver sits in the giver's
/// exclusion set. The check is directional: only the giver's list is
/// consulted.
fn cycle_edges(roster: &Roster, order: &[usize]) -> Option<Vec<AssignmentEdge>> {
    let participants = roster.participants();
    let n = order.len();
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let giver = &participants[order[i]];
        let receiver = &participants[order[(i + 1) % n]];
        if giver.excludes(receiver.id) {
            return None;
        }
        edges.push(AssignmentEdge {
            giver: giver.id,
            receiver: receiver.id,
        });
    }
    Some(edges)
}
