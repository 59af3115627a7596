use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::metrics::handlers::get_own_metrics,
        features::metrics::handlers::update_own_metrics,
        features::ranking::handlers::get_ranking,
        features::admin::handlers::list_directors,
        features::admin::handlers::update_director_metrics,
    ),
    components(
        schemas(
            storage::dto::auth::LoginRequest,
            storage::dto::auth::LoginResponse,
            storage::dto::participant::ParticipantSummary,
            storage::dto::participant::ParticipantDetail,
            storage::dto::metrics::MetricsInput,
            storage::dto::ranking::RankingEntry,
            storage::dto::admin::DirectorMetrics,
            storage::dto::admin::MetricsUpdated,
            storage::models::MetricCounters,
            storage::models::MetricRecord,
            storage::models::ScoreBreakdown,
            storage::models::Role,
        )
    ),
    tags(
        (name = "auth", description = "Login and logout"),
        (name = "metrics", description = "Self-reported metrics of the logged-in director"),
        (name = "ranking", description = "Public ranking"),
        (name = "admin", description = "Administrator endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token")
                        .build(),
                ),
            )
        }
    }
}
