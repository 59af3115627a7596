use axum::{Json, Router, response::IntoResponse, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod docs;
pub mod error;
pub mod features;
pub mod middleware;
pub mod policy;
pub mod state;

pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", features::auth::routes::routes(state.clone()))
        .nest("/metrics", features::metrics::routes::routes(state.clone()))
        .nest("/ranking", features::ranking::routes::routes())
        .nest("/admin", features::admin::routes::routes(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
