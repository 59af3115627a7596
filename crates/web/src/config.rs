use std::path::PathBuf;

use anyhow::{Context, Result};
use storage::repository::metrics::ReadPolicy;

const DEFAULT_DATABASE_URL: &str = "sqlite://metrics.db";
const DEFAULT_ROSTER_PATH: &str = "roster.json";
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub roster_path: PathBuf,
    pub session_ttl_hours: i64,
    pub read_policy: ReadPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let session_ttl_hours = match lookup("SESSION_TTL_HOURS") {
            Some(raw) => raw
                .parse()
                .context("SESSION_TTL_HOURS must be a number of hours")?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&session_ttl_hours) {
            anyhow::bail!(
                "SESSION_TTL_HOURS must be between 1 and {}, got {}",
                MAX_SESSION_TTL_HOURS,
                session_ttl_hours
            );
        }

        let read_policy = match lookup("METRICS_READ_POLICY") {
            Some(raw) => raw.parse().map_err(anyhow::Error::msg)?,
            None => ReadPolicy::default(),
        };

        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            roster_path: lookup("ROSTER_PATH")
                .unwrap_or_else(|| DEFAULT_ROSTER_PATH.to_string())
                .into(),
            session_ttl_hours,
            read_policy,
        })
    }
}
