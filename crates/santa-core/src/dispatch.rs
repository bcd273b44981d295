//! Notification dispatcher boundary.
//!
//! Delivery itself (SMTP or otherwise) lives outside this crate. This module
//! fixes the wire contract: the request body is an ordered list of notices
//! (each giver privately told their receiver, never the reverse) and the
//! response body is a per-recipient delivery report. Delivery failures are
//! the dispatcher's to report; they are never generation errors.

use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::participant::Roster;

/// One private notice: tell `giver` (at `giver_contact`) who they give to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub giver: String,
    pub giver_contact: String,
    pub receiver: String,
}

/// A delivery failure for a single notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryError {
    /// Display name of the giver whose notice failed.
    pub recipient: String,
    pub reason: String,
}

/// Structured outcome returned by a dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub successful: usize,
    pub failed: usize,
    #[serde(default)]
    pub errors: Vec<DeliveryError>,
}

/// External delivery collaborator.
///
/// Implementations may assume structural validity of the notices; the
/// generator never hands over a result that violates its invariants.
pub trait NotificationDispatcher {
    /// Attempt to deliver every notice; report per-recipient outcomes.
    fn deliver(&self, notices: &[Notice]) -> DeliveryReport;
}

/// Build the dispatch request body from a valid assignment.
///
/// Edges whose ids are missing from the roster are skipped; that cannot
/// happen for an assignment generated from the same roster.
#[must_use]
pub fn notices(assignment: &Assignment, roster: &Roster) -> Vec<Notice> {
    assignment
        .edges()
        .iter()
        .filter_map(|edge| {
            let giver = roster.get(edge.giver)?;
            let receiver = roster.get(edge.receiver)?;
            Some(Notice {
                giver: giver.name.clone(),
                giver_contact: giver.contact.clone(),
                receiver: receiver.name.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{CycleGenerator, GenerateOptions};
    use crate::observers::NoOpObserver;
    use crate::participant::Participant;
    use crate::progress::CancellationToken;
    use crate::rng::SeededRandom;

    fn fixture() -> (Roster, Assignment) {
        let roster = Roster::new(vec![
            Participant::new(1u64, "Ana", "ana@example.com"),
            Participant::new(2u64, "Luis", "luis@example.com"),
            Participant::new(3u64, "Marta", "marta@example.com"),
        ])
        .unwrap();
        let mut rng = SeededRandom::new(17);
        let assignment = CycleGenerator::new()
            .generate(
                &roster,
                &GenerateOptions::default(),
                &mut rng,
                &CancellationToken::new(),
                &NoOpObserver::new(),
            )
            .unwrap();
        (roster, assignment)
    }

    #[test]
    fn notices_name_the_receiver_to_the_giver() {
        let (roster, assignment) = fixture();
        let notices = notices(&assignment, &roster);
        assert_eq!(notices.len(), 3);
        for (notice, edge) in notices.iter().zip(assignment.edges()) {
            assert_eq!(notice.giver, roster.get(edge.giver).unwrap().name);
            assert_eq!(notice.giver_contact, roster.get(edge.giver).unwrap().contact);
            assert_eq!(notice.receiver, roster.get(edge.receiver).unwrap().name);
        }
    }

    #[test]
    fn notices_serialize_as_the_request_body() {
        let (roster, assignment) = fixture();
        let body = serde_json::to_string(&notices(&assignment, &roster)).unwrap();
        assert!(body.contains("\"giver\""));
        assert!(body.contains("\"receiver\""));
        // The receiver's contact never leaks into the notice.
        assert!(!body.contains("receiver_contact"));
    }

    /// Dispatcher that fails any notice addressed outside example.com,
    /// standing in for a real delivery channel.
    struct PickyDispatcher;

    impl NotificationDispatcher for PickyDispatcher {
        fn deliver(&self, notices: &[Notice]) -> DeliveryReport {
            let mut report = DeliveryReport::default();
            for notice in notices {
                if notice.giver_contact.ends_with("@example.com") {
                    report.successful += 1;
                } else {
                    report.failed += 1;
                    report.errors.push(DeliveryError {
                        recipient: notice.giver.clone(),
                        reason: "unroutable address".to_owned(),
                    });
                }
            }
            report
        }
    }

    #[test]
    fn dispatcher_reports_per_recipient_outcomes() {
        let (roster, assignment) = fixture();
        let mut notices = notices(&assignment, &roster);
        notices[0].giver_contact = "nowhere@invalid".to_owned();

        let report = PickyDispatcher.deliver(&notices);
        assert_eq!(report.successful, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].reason, "unroutable address");
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = DeliveryReport {
            successful: 2,
            failed: 1,
            errors: vec![DeliveryError {
                recipient: "Ana".into(),
                reason: "mailbox unavailable".into(),
            }],
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: DeliveryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
