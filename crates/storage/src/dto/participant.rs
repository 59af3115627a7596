use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Participant, ParticipantId, Role};

/// Public view of a participant, as shown on the ranking page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub name: String,
}

/// Participant view for authenticated callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDetail {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Participant> for ParticipantSummary {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name.clone(),
        }
    }
}

impl From<&Participant> for ParticipantDetail {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name.clone(),
            email: participant.email.clone(),
            role: participant.role,
        }
    }
}
