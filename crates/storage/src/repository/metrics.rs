use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::dto::metrics::MetricsInput;
use crate::error::{Result, StorageError};
use crate::models::{MetricCounters, MetricRecord, ParticipantId};

/// What reads do when the metrics table cannot be read or decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Log a warning and answer as if no metrics were stored yet.
    #[default]
    Degrade,
    /// Propagate the storage error to the caller.
    Fail,
}

impl ReadPolicy {
    fn recover<T>(self, error: StorageError, what: &str, fallback: impl FnOnce() -> T) -> Result<T> {
        match self {
            Self::Degrade => {
                tracing::warn!(error = %error, "Failed to read {}, treating as empty", what);
                Ok(fallback())
            }
            Self::Fail => Err(error),
        }
    }
}

impl FromStr for ReadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown read policy '{}', expected 'degrade' or 'fail'",
                other
            )),
        }
    }
}

impl fmt::Display for ReadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrade => write!(f, "degrade"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

#[derive(FromRow)]
struct MetricsRow {
    participant_id: i64,
    agendamentos: i64,
    visitas_realizadas: i64,
    contratos_assinados: i64,
    last_update: DateTime<Utc>,
}

impl TryFrom<MetricsRow> for MetricRecord {
    type Error = StorageError;

    fn try_from(row: MetricsRow) -> Result<Self> {
        let count = |column: &str, value: i64| {
            u32::try_from(value).map_err(|_| {
                StorageError::Corrupt(format!(
                    "participant {} has {} = {}",
                    row.participant_id, column, value
                ))
            })
        };

        Ok(Self {
            participant_id: row.participant_id,
            counters: MetricCounters {
                agendamentos: count("agendamentos", row.agendamentos)?,
                visitas_realizadas: count("visitas_realizadas", row.visitas_realizadas)?,
                contratos_assinados: count("contratos_assinados", row.contratos_assinados)?,
            },
            last_update: Some(row.last_update),
        })
    }
}

/// Durable per-participant metric counters.
///
/// Each upsert is a single statement keyed by participant, so concurrent
/// writes for different participants never overwrite each other. Writes for
/// the same participant are last-write-wins.
pub struct MetricsRepository<'a> {
    pool: &'a SqlitePool,
    read_policy: ReadPolicy,
}

impl<'a> MetricsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            read_policy: ReadPolicy::default(),
        }
    }

    pub fn with_read_policy(mut self, read_policy: ReadPolicy) -> Self {
        self.read_policy = read_policy;
        self
    }

    /// All stored records keyed by participant.
    pub async fn get_all(&self) -> Result<HashMap<ParticipantId, MetricRecord>> {
        match self.fetch_all().await {
            Ok(records) => Ok(records),
            Err(e) => self.read_policy.recover(e, "metrics", HashMap::new),
        }
    }

    /// The participant's record, or a zero record when nothing was stored.
    pub async fn get_by_participant(&self, participant_id: ParticipantId) -> Result<MetricRecord> {
        match self.fetch_one(participant_id).await {
            Ok(record) => Ok(record.unwrap_or_else(|| MetricRecord::empty(participant_id))),
            Err(e) => self
                .read_policy
                .recover(e, "participant metrics", || MetricRecord::empty(participant_id)),
        }
    }

    /// Replaces all three counters and stamps `last_update`.
    ///
    /// Invalid input fails with [`StorageError::Validation`] before anything
    /// is written.
    pub async fn upsert(
        &self,
        participant_id: ParticipantId,
        input: &MetricsInput,
    ) -> Result<MetricRecord> {
        let counters = input.counters()?;
        let record = MetricRecord {
            participant_id,
            counters,
            last_update: Some(Utc::now()),
        };

        sqlx::query(
            r#"
            INSERT INTO participant_metrics
                (participant_id, agendamentos, visitas_realizadas, contratos_assinados, last_update)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (participant_id)
            DO UPDATE SET
                agendamentos = excluded.agendamentos,
                visitas_realizadas = excluded.visitas_realizadas,
                contratos_assinados = excluded.contratos_assinados,
                last_update = excluded.last_update
            "#,
        )
        .bind(participant_id)
        .bind(i64::from(counters.agendamentos))
        .bind(i64::from(counters.visitas_realizadas))
        .bind(i64::from(counters.contratos_assinados))
        .bind(record.last_update)
        .execute(self.pool)
        .await?;

        tracing::debug!(participant_id, ?counters, "Metrics upserted");

        Ok(record)
    }

    async fn fetch_all(&self) -> Result<HashMap<ParticipantId, MetricRecord>> {
        let rows: Vec<MetricsRow> = sqlx::query_as(
            r#"
            SELECT participant_id, agendamentos, visitas_realizadas, contratos_assinados, last_update
            FROM participant_metrics
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let record = MetricRecord::try_from(row)?;
                Ok((record.participant_id, record))
            })
            .collect()
    }

    async fn fetch_one(&self, participant_id: ParticipantId) -> Result<Option<MetricRecord>> {
        let row: Option<MetricsRow> = sqlx::query_as(
            r#"
            SELECT participant_id, agendamentos, visitas_realizadas, contratos_assinados, last_update
            FROM participant_metrics
            WHERE participant_id = ?
            "#,
        )
        .bind(participant_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(MetricRecord::try_from).transpose()
    }
}
