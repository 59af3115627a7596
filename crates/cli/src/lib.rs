pub mod error;
pub mod report;

pub use error::{CliError, Result};

use std::path::Path;

use storage::{
    Database, dto::ranking::RankingEntry, repository::metrics::ReadPolicy, roster::Roster,
    services::ranking,
};

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(CliError::InvalidCost(cost));
    }
    Ok(bcrypt::hash(password, cost)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Loads the roster and an existing metrics database and ranks like the API
/// does, except that read failures are reported instead of hidden. A database
/// that does not exist, or was never migrated, is an error.
pub async fn load_ranking(database_url: &str, roster_path: &Path) -> Result<Vec<RankingEntry>> {
    let roster = Roster::load(roster_path)?;

    let db = Database::open_existing(database_url).await?;

    let entries = ranking::ranking(db.pool(), &roster, ReadPolicy::Fail).await?;
    tracing::debug!(entries = entries.len(), "Ranking built");

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use storage::{dto::metrics::MetricsInput, repository::metrics::MetricsRepository};

    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("@Gabriela12345", MIN_COST).unwrap();

        assert!(hash.starts_with("$2"));
        assert!(verify_password("@Gabriela12345", &hash).unwrap());
        assert!(!verify_password("gabriela", &hash).unwrap());
    }

    #[test]
    fn test_cost_bounds() {
        assert!(matches!(hash_password("x", 3), Err(CliError::InvalidCost(3))));
        assert!(matches!(hash_password("x", 32), Err(CliError::InvalidCost(32))));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(verify_password("x", "plain"), Err(CliError::Hash(_))));
    }

    fn write_roster(dir: &Path) -> std::path::PathBuf {
        let roster_path = dir.join("roster.json");
        let mut file = std::fs::File::create(&roster_path).unwrap();
        file.write_all(
            br#"{"participants": [
                {"id": 1, "name": "Ana", "email": "ana@example.com", "passwordHash": "x", "role": "director"},
                {"id": 2, "name": "Bruno", "email": "bruno@example.com", "passwordHash": "x", "role": "director"}
            ]}"#,
        )
        .unwrap();
        roster_path
    }

    #[tokio::test]
    async fn test_load_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = write_roster(dir.path());

        let url = format!("sqlite://{}", dir.path().join("metrics.db").display());
        {
            let db = Database::new(&url).await.unwrap();
            db.run_migrations().await.unwrap();
            MetricsRepository::new(db.pool())
                .upsert(2, &MetricsInput::new(1, 0, 0))
                .await
                .unwrap();
            db.pool().close().await;
        }

        let entries = load_ranking(&url, &roster_path).await.unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.participant.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_load_ranking_missing_database_fails() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = write_roster(dir.path());
        let db_path = dir.path().join("typo.db");
        let url = format!("sqlite://{}", db_path.display());

        let result = load_ranking(&url, &roster_path).await;

        assert!(matches!(result, Err(CliError::Storage(_))));
        assert!(!db_path.exists());
    }

    #[tokio::test]
    async fn test_load_ranking_unmigrated_database_fails() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = write_roster(dir.path());
        let url = format!("sqlite://{}", dir.path().join("empty.db").display());
        Database::new(&url).await.unwrap().pool().close().await;

        assert!(load_ranking(&url, &roster_path).await.is_err());
    }
}
