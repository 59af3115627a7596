use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::participant::ParticipantDetail;
use crate::models::MetricRecord;

/// A director together with its current metrics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DirectorMetrics {
    pub participant: ParticipantDetail,
    pub metrics: MetricRecord,
}

/// Confirmation returned after an administrator edit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricsUpdated {
    pub message: String,
    pub metrics: MetricRecord,
}
