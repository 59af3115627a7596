use crate::models::{MetricCounters, ScoreBreakdown};

pub const AGENDAMENTO_POINTS: u64 = 5;
pub const VISIT_POINTS: u64 = 20;
pub const CONTRACT_POINTS: u64 = 50;

/// Weighted points for a set of counters.
///
/// Score = agendamentos × 5 + visitasRealizadas × 20 + contratosAssinados × 50
pub fn score(counters: &MetricCounters) -> ScoreBreakdown {
    let points_agendamentos = u64::from(counters.agendamentos) * AGENDAMENTO_POINTS;
    let points_visits = u64::from(counters.visitas_realizadas) * VISIT_POINTS;
    let points_contracts = u64::from(counters.contratos_assinados) * CONTRACT_POINTS;

    ScoreBreakdown {
        points_agendamentos,
        points_visits,
        points_contracts,
        total: points_agendamentos + points_visits + points_contracts,
    }
}
