use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::participant::ParticipantSummary;
use crate::models::{MetricCounters, ScoreBreakdown};

/// One row of the public ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankingEntry {
    /// 1-based, unique even when totals tie
    pub position: u32,
    pub participant: ParticipantSummary,
    #[serde(flatten)]
    pub counters: MetricCounters,
    pub score: ScoreBreakdown,
}
