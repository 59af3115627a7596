use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub type ParticipantId = i64;

/// What a roster entry is allowed to do.
///
/// Unknown role names deserialize to [`Role::Other`]: such entries can
/// neither log in nor appear in the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Director,
    Administrator,
    Other,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "director" | "diretor" => Self::Director,
            "administrator" | "admin" => Self::Administrator,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A roster entry.
///
/// Deliberately not `Serialize`: it carries the password hash. Responses go
/// through [`crate::dto::participant::ParticipantDetail`] instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl Participant {
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
        }
    }

    /// Directors are the only scoring participants.
    pub fn is_eligible(&self) -> bool {
        self.role == Role::Director
    }

    pub fn is_administrator(&self) -> bool {
        self.role == Role::Administrator
    }

    pub fn can_log_in(&self) -> bool {
        matches!(self.role, Role::Director | Role::Administrator)
    }
}
