//! Golden roster integration tests.
//!
//! Reads tests/testdata/*.json rosters and verifies the generator's
//! invariants hold across many seeds, and that seeded runs reproduce
//! exactly.

use std::collections::BTreeSet;

use santa_core::assignment::Assignment;
use santa_core::generator::{AssignError, CycleGenerator, GenerateOptions};
use santa_core::observers::NoOpObserver;
use santa_core::participant::Roster;
use santa_core::progress::CancellationToken;
use santa_core::rng::SeededRandom;

fn load_roster(name: &str) -> Roster {
    let path = format!("{}/tests/testdata/{name}", env!("CARGO_MANIFEST_DIR"));
    let data = std::fs::read_to_string(&path).expect("failed to read roster fixture");
    Roster::from_json(&data).expect("failed to parse roster fixture")
}

fn generate(roster: &Roster, seed: u64) -> Result<Assignment, AssignError> {
    let mut rng = SeededRandom::new(seed);
    CycleGenerator::new().generate(
        roster,
        &GenerateOptions::default(),
        &mut rng,
        &CancellationToken::new(),
        &NoOpObserver::new(),
    )
}

fn assert_invariants(assignment: &Assignment, roster: &Roster) {
    let n = roster.len();
    assert_eq!(assignment.len(), n);

    let givers: BTreeSet<_> = assignment.edges().iter().map(|e| e.giver).collect();
    let receivers: BTreeSet<_> = assignment.edges().iter().map(|e| e.receiver).collect();
    let all: BTreeSet<_> = roster.participants().iter().map(|p| p.id).collect();
    assert_eq!(givers, all, "every participant gives exactly once");
    assert_eq!(receivers, all, "every participant receives exactly once");

    let start = assignment.edges()[0].giver;
    let mut current = start;
    for step in 1..=n {
        current = assignment.receiver_of(current).expect("giver missing");
        if current == start {
            assert_eq!(step, n, "assignment contains a sub-cycle");
        }
    }

    for edge in assignment.edges() {
        let giver = roster.get(edge.giver).expect("unknown giver");
        assert!(
            !giver.excludes(edge.receiver),
            "{} -> {} violates an exclusion",
            edge.giver,
            edge.receiver
        );
    }
}

#[test]
fn golden_roster_satisfies_invariants_across_seeds() {
    let roster = load_roster("roster_golden.json");
    for seed in 0..50 {
        let assignment = generate(&roster, seed)
            .unwrap_or_else(|e| panic!("seed {seed} failed unexpectedly: {e}"));
        assert_invariants(&assignment, &roster);
    }
}

#[test]
fn golden_roster_is_deterministic_per_seed() {
    let roster = load_roster("roster_golden.json");
    for seed in [0, 7, 42, 1234] {
        let first = generate(&roster, seed).unwrap();
        let second = generate(&roster, seed).unwrap();
        assert_eq!(first, second, "seed {seed} diverged between runs");
    }
}

#[test]
fn impossible_roster_exhausts_every_seed() {
    let roster = load_roster("roster_impossible.json");
    for seed in 0..10 {
        let err = generate(&roster, seed).unwrap_err();
        assert!(
            matches!(err, AssignError::Exhausted { attempts: 1000 }),
            "seed {seed}: unexpected outcome {err}"
        );
    }
}
