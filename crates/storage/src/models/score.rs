use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Points earned per metric and their sum.
///
/// Derived from [`super::MetricCounters`] on every read, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub points_agendamentos: u64,
    pub points_visits: u64,
    pub points_contracts: u64,
    pub total: u64,
}
