//! # santa-core
//!
//! Core library for the santa-rs Secret-Santa assignment generator.
//! Produces a single-cycle gift assignment over a participant roster,
//! honoring per-person exclusion lists, via bounded rejection sampling.

pub mod assignment;
pub mod constants;
pub mod dispatch;
pub mod generator;
pub mod observer;
pub mod observers;
pub mod participant;
pub mod progress;
pub mod rng;

// Re-exports
pub use assignment::{Assignment, AssignmentEdge};
pub use constants::{exit_codes, DEFAULT_MAX_ATTEMPTS, MIN_PARTICIPANTS};
pub use dispatch::{DeliveryReport, Notice, NotificationDispatcher};
pub use generator::{AssignError, CycleGenerator, GenerateOptions};
pub use observer::{ProgressObserver, ProgressSubject};
pub use participant::{Participant, ParticipantId, Roster, RosterError};
pub use progress::{AttemptUpdate, CancellationToken};
pub use rng::{RandomSource, SeededRandom, ThreadRandom};

/// Generate an assignment for `roster` with default options and OS-seeded
/// randomness.
///
/// This is a convenience function for simple use cases. For progress
/// reporting, cancellation, seeding, or a custom attempt bound, use
/// `CycleGenerator::generate` directly.
///
/// # Example
/// ```
/// use santa_core::participant::{Participant, Roster};
///
/// let roster = Roster::new(vec![
///     Participant::new(1u64, "Ana", "ana@example.com"),
///     Participant::new(2u64, "Luis", "luis@example.com"),
///     Participant::new(3u64, "Marta", "marta@example.com"),
/// ])
/// .unwrap();
///
/// let assignment = santa_core::assign(&roster).unwrap();
/// assert_eq!(assignment.len(), 3);
/// ```
pub fn assign(roster: &Roster) -> Result<Assignment, AssignError> {
    use observers::NoOpObserver;

    let generator = CycleGenerator::new();
    let mut rng = ThreadRandom::new();
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    generator.generate(
        roster,
        &GenerateOptions::default(),
        &mut rng,
        &cancel,
        &observer,
    )
}
