use storage::{
    Database,
    dto::metrics::MetricsInput,
    error::Result,
    models::{MetricRecord, ParticipantId},
    repository::metrics::{MetricsRepository, ReadPolicy},
};

/// Current record of a participant (zero record when nothing was reported)
pub async fn get_metrics(
    db: &Database,
    read_policy: ReadPolicy,
    participant_id: ParticipantId,
) -> Result<MetricRecord> {
    MetricsRepository::new(db.pool())
        .with_read_policy(read_policy)
        .get_by_participant(participant_id)
        .await
}

/// Replace all three counters of a participant
pub async fn update_metrics(
    db: &Database,
    participant_id: ParticipantId,
    input: &MetricsInput,
) -> Result<MetricRecord> {
    MetricsRepository::new(db.pool())
        .upsert(participant_id, input)
        .await
}
