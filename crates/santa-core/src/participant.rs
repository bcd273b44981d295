//! Participant and roster types.
//!
//! A `Roster` is a validated, immutable snapshot of the participant set.
//! The generator only ever reads it; roster editing (CRUD) belongs to the
//! caller.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable participant identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ParticipantId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A single participant: identity, display name, contact address, and the
/// set of ids this participant must not give a gift to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub excluded: BTreeSet<ParticipantId>,
}

impl Participant {
    /// Create a participant with no exclusions.
    #[must_use]
    pub fn new(id: impl Into<ParticipantId>, name: &str, contact: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_owned(),
            contact: contact.to_owned(),
            excluded: BTreeSet::new(),
        }
    }

    /// Add an exclusion and return self, for fixture-style construction.
    #[must_use]
    pub fn excluding(mut self, id: impl Into<ParticipantId>) -> Self {
        self.excluded.insert(id.into());
        self
    }

    /// Whether this participant refuses to give to `receiver`.
    #[must_use]
    pub fn excludes(&self, receiver: ParticipantId) -> bool {
        self.excluded.contains(&receiver)
    }
}

/// Error type for roster validation.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Two participants share the same id.
    #[error("duplicate participant id {0}")]
    DuplicateId(ParticipantId),

    /// An exclusion references an id that is not in the roster.
    #[error("participant {0} excludes unknown id {1}")]
    UnknownExclusion(ParticipantId, ParticipantId),

    /// The roster file could not be parsed.
    #[error("invalid roster: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validated, immutable participant snapshot.
///
/// Ids are unique and every exclusion references a roster member.
/// Self-exclusions are dropped at construction: a participant can never be
/// adjacent to itself in a cycle of size >= 2, so the entry is inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Build a roster from a participant list, validating invariants.
    pub fn new(mut participants: Vec<Participant>) -> Result<Self, RosterError> {
        let mut seen: HashSet<ParticipantId> = HashSet::with_capacity(participants.len());
        for p in &participants {
            if !seen.insert(p.id) {
                return Err(RosterError::DuplicateId(p.id));
            }
        }
        for p in &participants {
            for &ex in &p.excluded {
                if ex != p.id && !seen.contains(&ex) {
                    return Err(RosterError::UnknownExclusion(p.id, ex));
                }
            }
        }
        for p in &mut participants {
            let own = p.id;
            p.excluded.remove(&own);
        }
        Ok(Self { participants })
    }

    /// Parse a roster from its JSON representation:
    /// `{ "participants": [ { "id", "name", "contact", "excluded" } ] }`.
    pub fn from_json(data: &str) -> Result<Self, RosterError> {
        #[derive(Deserialize)]
        struct RosterFile {
            participants: Vec<Participant>,
        }
        let file: RosterFile = serde_json::from_str(data)?;
        Self::new(file.participants)
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants in roster order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Look up a participant by id.
    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }
}
