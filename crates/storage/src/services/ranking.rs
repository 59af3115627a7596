use std::collections::HashMap;

use sqlx::SqlitePool;

use super::scoring::score;
use crate::dto::participant::ParticipantSummary;
use crate::dto::ranking::RankingEntry;
use crate::error::Result;
use crate::models::{MetricRecord, ParticipantId};
use crate::repository::metrics::{MetricsRepository, ReadPolicy};
use crate::roster::Roster;

/// Ranks the eligible participants of `roster` by total score.
///
/// Participants without a stored record score zero. The sort is stable, so
/// equal totals keep roster order; positions are 1..=N and never shared.
pub fn build_ranking(
    roster: &Roster,
    metrics: &HashMap<ParticipantId, MetricRecord>,
) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = roster
        .eligible()
        .map(|participant| {
            let counters = record_or_empty(metrics, participant.id).counters;

            RankingEntry {
                position: 0,
                participant: ParticipantSummary::from(participant),
                counters,
                score: score(&counters),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.total.cmp(&a.score.total));

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.position = index as u32 + 1;
    }

    entries
}

/// Current ranking, read from a single snapshot of the metrics store.
pub async fn ranking(
    pool: &SqlitePool,
    roster: &Roster,
    read_policy: ReadPolicy,
) -> Result<Vec<RankingEntry>> {
    let metrics = MetricsRepository::new(pool)
        .with_read_policy(read_policy)
        .get_all()
        .await?;

    Ok(build_ranking(roster, &metrics))
}

/// The stored record, or a zero record for participants that never reported.
pub fn record_or_empty(
    metrics: &HashMap<ParticipantId, MetricRecord>,
    participant_id: ParticipantId,
) -> MetricRecord {
    metrics
        .get(&participant_id)
        .cloned()
        .unwrap_or_else(|| MetricRecord::empty(participant_id))
}
