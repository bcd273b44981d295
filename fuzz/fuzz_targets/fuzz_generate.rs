#![no_main]

use libfuzzer_sys::fuzz_target;

use santa_core::generator::{CycleGenerator, GenerateOptions};
use santa_core::observers::NoOpObserver;
use santa_core::participant::{Participant, ParticipantId, Roster};
use santa_core::progress::CancellationToken;
use santa_core::rng::SeededRandom;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let seed = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let n = usize::from(data[8] % 12);

    // Remaining bytes drive the exclusion sets.
    let mut bytes = data[9..].iter().copied().cycle();
    let people: Vec<Participant> = (1..=n as u64)
        .map(|id| {
            let mut p = Participant::new(id, &format!("p{id}"), &format!("p{id}@example.com"));
            for other in 1..=n as u64 {
                if bytes.next().unwrap_or(0) % 4 == 0 {
                    p = p.excluding(other);
                }
            }
            p
        })
        .collect();
    let Ok(roster) = Roster::new(people) else {
        return;
    };

    let opts = GenerateOptions {
        max_attempts: 64,
        attempt_pause: None,
    };
    let mut rng = SeededRandom::new(seed);
    let outcome = CycleGenerator::new().generate(
        &roster,
        &opts,
        &mut rng,
        &CancellationToken::new(),
        &NoOpObserver::new(),
    );

    if let Ok(assignment) = outcome {
        assert_eq!(assignment.len(), roster.len());
        for edge in assignment.edges() {
            let giver = roster.get(edge.giver).expect("giver in roster");
            assert!(!giver.excludes(edge.receiver));
            assert_ne!(
                edge.giver,
                ParticipantId(0),
                "ids are 1-based in this harness"
            );
        }
    }
});
