use axum::{Extension, Json, extract::State};
use storage::{dto::metrics::MetricsInput, models::MetricRecord};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::CurrentUser;
use crate::policy::{Action, authorize};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/metrics",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Metrics of the logged-in participant", body = MetricRecord),
        (status = 401, description = "Unauthorized")
    ),
    tag = "metrics"
)]
pub async fn get_own_metrics(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> WebResult<Json<MetricRecord>> {
    authorize(user.actor(), Action::ReadMetrics(user.participant_id))?;

    let record = services::get_metrics(&state.db, state.read_policy, user.participant_id).await?;

    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/api/metrics",
    request_body = MetricsInput,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Metrics replaced", body = MetricRecord),
        (status = 400, description = "Negative or out of range counter"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "metrics"
)]
pub async fn update_own_metrics(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<MetricsInput>,
) -> WebResult<Json<MetricRecord>> {
    authorize(user.actor(), Action::WriteMetrics(user.participant_id))?;
    input.validate()?;

    let record = services::update_metrics(&state.db, user.participant_id, &input).await?;

    tracing::info!(
        participant_id = user.participant_id,
        agendamentos = record.counters.agendamentos,
        visitas_realizadas = record.counters.visitas_realizadas,
        contratos_assinados = record.counters.contratos_assinados,
        "Participant updated own metrics"
    );

    Ok(Json(record))
}
