use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use storage::dto::{
    auth::{LoginRequest, LoginResponse},
    participant::ParticipantDetail,
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Email or password missing"),
        (status = 401, description = "Invalid credentials or ineligible role")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> WebResult<Json<LoginResponse>> {
    request.validate()?;

    let participant = services::authenticate(&state.roster, &request.email, &request.password).await?;

    state.sessions.purge_expired();
    let (token, session) = state.sessions.issue(participant.id).ok_or_else(|| {
        WebError::InternalServerError("session expiry out of range".to_string())
    })?;

    tracing::info!(participant_id = participant.id, role = ?participant.role, "Login succeeded");

    Ok(Json(LoginResponse {
        token: token.to_string(),
        expires_at: session.expires_at,
        user: ParticipantDetail::from(participant),
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> StatusCode {
    state.sessions.revoke(&user.token);
    tracing::info!(participant_id = user.participant_id, "Logged out");

    StatusCode::NO_CONTENT
}
