//! Assignment result types.

use serde::Serialize;

use crate::participant::ParticipantId;

/// One directed gift edge: `giver` gives to `receiver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentEdge {
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
}

/// A complete single-cycle assignment plus the number of attempts it took.
///
/// Edges cover every participant exactly once as giver and exactly once as
/// receiver. Immutable after creation; a later generation call produces a
/// fresh value rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    edges: Vec<AssignmentEdge>,
    attempts: u32,
}

impl Assignment {
    pub(crate) fn new(edges: Vec<AssignmentEdge>, attempts: u32) -> Self {
        Self { edges, attempts }
    }

    /// Edges in cycle order.
    #[must_use]
    pub fn edges(&self) -> &[AssignmentEdge] {
        &self.edges
    }

    /// Attempts consumed to find this assignment (>= 1).
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of edges (= number of participants).
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the assignment holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Who `giver` gives to, if `giver` appears in this assignment.
    #[must_use]
    pub fn receiver_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.edges
            .iter()
            .find(|e| e.giver == giver)
            .map(|e| e.receiver)
    }
}
