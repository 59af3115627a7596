use axum::{Json, extract::State};
use storage::dto::ranking::RankingEntry;

use crate::error::WebResult;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/ranking",
    responses(
        (status = 200, description = "Ranking retrieved successfully", body = Vec<RankingEntry>)
    ),
    tag = "ranking"
)]
pub async fn get_ranking(State(state): State<AppState>) -> WebResult<Json<Vec<RankingEntry>>> {
    let entries = services::get_ranking(&state.db, &state.roster, state.read_policy).await?;

    Ok(Json(entries))
}
