use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{list_directors, update_director_metrics};
use crate::middleware::auth::{require_admin, require_session};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/directors", get(list_directors))
        .route("/directors/:id/metrics", put(update_director_metrics))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}
