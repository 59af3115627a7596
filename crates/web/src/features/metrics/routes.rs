use axum::{Router, middleware, routing::get};

use super::handlers::{get_own_metrics, update_own_metrics};
use crate::middleware::auth::require_session;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_own_metrics).put(update_own_metrics))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}
