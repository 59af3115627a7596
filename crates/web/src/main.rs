use anyhow::Context;
use storage::{Database, roster::Roster};
use web::{AppState, config::Config, create_router, middleware::auth::SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting director ranking API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        read_policy = %config.read_policy,
        session_ttl_hours = config.session_ttl_hours,
        "Configuration loaded successfully"
    );

    let roster = Roster::load(&config.roster_path)
        .with_context(|| format!("Failed to load roster from {}", config.roster_path.display()))?;
    if roster.administrator().is_none() {
        tracing::warn!("Roster has no administrator, admin endpoints are unreachable");
    }
    if roster.eligible().next().is_none() {
        tracing::warn!("Roster has no directors, the ranking will be empty");
    }

    tracing::info!("Opening metrics database at: {}", config.database_url);
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState::new(
        db,
        roster,
        SessionStore::with_ttl_hours(config.session_ttl_hours)
            .context("SESSION_TTL_HOURS out of range")?,
        config.read_policy,
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
