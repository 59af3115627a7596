mod metrics;
mod participant;
mod score;

pub use metrics::{MetricCounters, MetricRecord};
pub use participant::{Participant, ParticipantId, Role};
pub use score::ScoreBreakdown;
