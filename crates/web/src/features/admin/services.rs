use storage::{
    Database,
    dto::{admin::DirectorMetrics, metrics::MetricsInput, participant::ParticipantDetail},
    error::{Result, StorageError},
    models::{MetricRecord, ParticipantId},
    repository::metrics::{MetricsRepository, ReadPolicy},
    roster::Roster,
    services::ranking::record_or_empty,
};

/// Every eligible director with its current metrics, in roster order
pub async fn list_directors(
    db: &Database,
    roster: &Roster,
    read_policy: ReadPolicy,
) -> Result<Vec<DirectorMetrics>> {
    let metrics = MetricsRepository::new(db.pool())
        .with_read_policy(read_policy)
        .get_all()
        .await?;

    let directors = roster
        .eligible()
        .map(|participant| DirectorMetrics {
            participant: ParticipantDetail::from(participant),
            metrics: record_or_empty(&metrics, participant.id),
        })
        .collect();

    Ok(directors)
}

/// Replace a director's counters on its behalf.
///
/// Fails with [`StorageError::NotFound`] when `participant_id` is not an
/// eligible director (unknown ids and the administrator itself included).
pub async fn update_director_metrics(
    db: &Database,
    roster: &Roster,
    participant_id: ParticipantId,
    input: &MetricsInput,
) -> Result<MetricRecord> {
    let director = roster
        .find_eligible(participant_id)
        .ok_or(StorageError::NotFound)?;

    MetricsRepository::new(db.pool())
        .upsert(director.id, input)
        .await
}
