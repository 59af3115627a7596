//! The roster of directors and the administrator.
//!
//! Loaded once from a JSON file so that roster changes never need a code
//! change. File order matters: it is the order of the eligible participants
//! handed to the ranking, and therefore the tie-break among equal scores.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StorageError};
use crate::models::{Participant, ParticipantId};

#[derive(Debug, Deserialize)]
struct RosterFile {
    participants: Vec<Participant>,
}

#[derive(Debug, Clone)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Reads and validates a roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let roster = Self::from_json(&raw)?;

        tracing::info!(
            path = %path.display(),
            participants = roster.participants.len(),
            "Roster loaded"
        );

        Ok(roster)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let file: RosterFile = serde_json::from_str(raw)?;
        Self::from_participants(file.participants)
    }

    /// Builds a roster, rejecting duplicate ids, duplicate emails and more
    /// than one administrator.
    pub fn from_participants(participants: Vec<Participant>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();

        for participant in &participants {
            if !ids.insert(participant.id) {
                return Err(StorageError::Roster(format!(
                    "duplicate participant id {}",
                    participant.id
                )));
            }

            let email = normalize_email(&participant.email);
            if email.is_empty() {
                return Err(StorageError::Roster(format!(
                    "participant {} has no email",
                    participant.id
                )));
            }
            if !emails.insert(email) {
                return Err(StorageError::Roster(format!(
                    "duplicate email '{}'",
                    participant.email
                )));
            }
        }

        let administrators = participants
            .iter()
            .filter(|p| p.is_administrator())
            .count();
        if administrators > 1 {
            return Err(StorageError::Roster(format!(
                "expected at most one administrator, found {}",
                administrators
            )));
        }

        Ok(Self { participants })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Scoring participants in roster order.
    pub fn eligible(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_eligible())
    }

    pub fn find(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn find_eligible(&self, id: ParticipantId) -> Option<&Participant> {
        self.find(id).filter(|p| p.is_eligible())
    }

    /// Case-insensitive, surrounding whitespace ignored.
    pub fn find_by_email(&self, email: &str) -> Option<&Participant> {
        let wanted = normalize_email(email);
        self.participants
            .iter()
            .find(|p| normalize_email(&p.email) == wanted)
    }

    pub fn administrator(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_administrator())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::Role;

    const ROSTER: &str = r#"{
        "participants": [
            {"id": 1, "name": "Ana", "email": "ana@example.com", "passwordHash": "x", "role": "director"},
            {"id": 9, "name": "Gabriela", "email": "Gabriela@Example.com", "passwordHash": "x", "role": "administrator"},
            {"id": 2, "name": "Bruno", "email": "bruno@example.com", "passwordHash": "x", "role": "director"},
            {"id": 5, "name": "Carla", "email": "carla@example.com", "passwordHash": "x", "role": "intern"}
        ]
    }"#;

    fn participant(id: ParticipantId, email: &str, role: Role) -> Participant {
        Participant::new(id, format!("P{}", id), email, "x", role)
    }

    #[test]
    fn test_eligible_keeps_file_order_and_skips_others() {
        let roster = Roster::from_json(ROSTER).unwrap();
        let ids: Vec<_> = roster.eligible().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 2]);
        assert_eq!(roster.participants().len(), 4);
    }

    #[test]
    fn test_lookups() {
        let roster = Roster::from_json(ROSTER).unwrap();

        assert_eq!(roster.administrator().map(|p| p.id), Some(9));
        assert_eq!(
            roster.find_by_email("  gabriela@EXAMPLE.com ").map(|p| p.id),
            Some(9)
        );
        assert!(roster.find_by_email("nobody@example.com").is_none());
        assert!(roster.find(5).is_some());
        assert!(roster.find_eligible(5).is_none());
        assert!(roster.find_eligible(9).is_none());
        assert_eq!(roster.find_eligible(2).map(|p| p.name.as_str()), Some("Bruno"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Roster::from_participants(vec![
            participant(1, "a@example.com", Role::Director),
            participant(1, "b@example.com", Role::Director),
        ]);
        assert!(matches!(result, Err(StorageError::Roster(_))));
    }

    #[test]
    fn test_rejects_duplicate_emails_case_insensitively() {
        let result = Roster::from_participants(vec![
            participant(1, "a@example.com", Role::Director),
            participant(2, "A@Example.com", Role::Director),
        ]);
        assert!(matches!(result, Err(StorageError::Roster(_))));
    }

    #[test]
    fn test_rejects_second_administrator() {
        let result = Roster::from_participants(vec![
            participant(1, "a@example.com", Role::Administrator),
            participant(2, "b@example.com", Role::Administrator),
        ]);
        assert!(matches!(result, Err(StorageError::Roster(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let roster = Roster::load(file.path()).unwrap();
        assert_eq!(roster.eligible().count(), 2);
    }

    #[test]
    fn test_load_reports_missing_and_malformed_files() {
        assert!(matches!(
            Roster::load("/nonexistent/roster.json"),
            Err(StorageError::Io(_))
        ));
        assert!(matches!(
            Roster::from_json("{\"participants\": 3}"),
            Err(StorageError::Json(_))
        ));
    }
}
