use storage::{
    Database,
    dto::ranking::RankingEntry,
    error::Result,
    repository::metrics::ReadPolicy,
    roster::Roster,
    services::ranking,
};

/// Ranking of all eligible participants, rebuilt on every call
pub async fn get_ranking(
    db: &Database,
    roster: &Roster,
    read_policy: ReadPolicy,
) -> Result<Vec<RankingEntry>> {
    ranking::ranking(db.pool(), roster, read_policy).await
}
