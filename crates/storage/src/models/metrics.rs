use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ParticipantId;

/// The three self-reported counters of a director.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricCounters {
    pub agendamentos: u32,
    pub visitas_realizadas: u32,
    pub contratos_assinados: u32,
}

impl MetricCounters {
    pub fn new(agendamentos: u32, visitas_realizadas: u32, contratos_assinados: u32) -> Self {
        Self {
            agendamentos,
            visitas_realizadas,
            contratos_assinados,
        }
    }
}

/// Stored counters of one participant.
///
/// A participant without a stored row is represented by
/// [`MetricRecord::empty`]: zero counters and no `last_update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub participant_id: ParticipantId,
    #[serde(flatten)]
    pub counters: MetricCounters,
    pub last_update: Option<DateTime<Utc>>,
}

impl MetricRecord {
    pub fn empty(participant_id: ParticipantId) -> Self {
        Self {
            participant_id,
            counters: MetricCounters::default(),
            last_update: None,
        }
    }
}
