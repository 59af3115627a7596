use axum::{
    Extension, Json,
    extract::{Path, State},
};
use storage::{
    dto::{
        admin::{DirectorMetrics, MetricsUpdated},
        metrics::MetricsInput,
    },
    models::ParticipantId,
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::CurrentUser;
use crate::policy::{Action, authorize};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/directors",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All directors with their metrics", body = Vec<DirectorMetrics>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not the administrator")
    ),
    tag = "admin"
)]
pub async fn list_directors(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> WebResult<Json<Vec<DirectorMetrics>>> {
    authorize(user.actor(), Action::ListDirectors)?;

    let directors = services::list_directors(&state.db, &state.roster, state.read_policy).await?;
    tracing::debug!(count = directors.len(), "Administrator listed directors");

    Ok(Json(directors))
}

#[utoipa::path(
    put,
    path = "/api/admin/directors/{id}/metrics",
    params(
        ("id" = i64, Path, description = "Director id")
    ),
    request_body = MetricsInput,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Metrics replaced", body = MetricsUpdated),
        (status = 400, description = "Negative or out of range counter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not the administrator"),
        (status = 404, description = "Not an eligible director")
    ),
    tag = "admin"
)]
pub async fn update_director_metrics(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<ParticipantId>,
    Json(input): Json<MetricsInput>,
) -> WebResult<Json<MetricsUpdated>> {
    authorize(user.actor(), Action::WriteMetrics(id))?;
    input.validate()?;

    let metrics = services::update_director_metrics(&state.db, &state.roster, id, &input).await?;

    tracing::info!(
        admin_id = user.participant_id,
        participant_id = id,
        "Administrator updated director metrics"
    );

    Ok(Json(MetricsUpdated {
        message: "Metrics updated successfully".to_string(),
        metrics,
    }))
}
