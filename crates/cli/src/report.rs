use std::fmt::Write;

use storage::{dto::ranking::RankingEntry, models::Role, roster::Roster};

/// Plain-text ranking, one line per director.
pub fn ranking_table(entries: &[RankingEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|e| e.participant.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Director".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:>6}  {:>6}  {:>9}  {:>6}",
        "#", "Director", "Agend.", "Visits", "Contracts", "Points"
    );

    for entry in entries {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>6}  {:>6}  {:>9}  {:>6}",
            entry.position,
            entry.participant.name,
            entry.counters.agendamentos,
            entry.counters.visitas_realizadas,
            entry.counters.contratos_assinados,
            entry.score.total,
        );
    }

    out
}

/// Findings of `check-roster` that do not prevent loading.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RosterReport {
    pub directors: usize,
    pub administrator: Option<String>,
    pub ineligible: Vec<String>,
    pub unhashed_passwords: Vec<String>,
}

impl RosterReport {
    pub fn from_roster(roster: &Roster) -> Self {
        let mut report = Self {
            directors: roster.eligible().count(),
            administrator: roster.administrator().map(|p| p.name.clone()),
            ..Self::default()
        };

        for participant in roster.participants() {
            if participant.role == Role::Other {
                report.ineligible.push(participant.name.clone());
            }
            if !participant.password_hash.starts_with("$2") {
                report.unhashed_passwords.push(participant.name.clone());
            }
        }

        report
    }

    pub fn log(&self) {
        tracing::info!("Directors: {}", self.directors);
        match &self.administrator {
            Some(name) => tracing::info!("Administrator: {}", name),
            None => tracing::warn!("No administrator configured"),
        }
        for name in &self.ineligible {
            tracing::warn!("'{}' has an unknown role and cannot log in", name);
        }
        for name in &self.unhashed_passwords {
            tracing::warn!("'{}' has no bcrypt password hash and cannot log in", name);
        }
    }

    pub fn is_clean(&self) -> bool {
        self.administrator.is_some() && self.ineligible.is_empty() && self.unhashed_passwords.is_empty()
    }
}
