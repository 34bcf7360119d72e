use anyhow::Context;
use campus::logging::init_tracing;
use campus::router::init_router;
use campus::state::AppState;
use campus_config::{CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use campus_db::init_db_pool;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(&LoggingConfig::from_env()).context("Failed to initialize logging")?;

    let database = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let server = ServerConfig::from_env();

    let pool = init_db_pool(&database)
        .await
        .context("Failed to connect to database")?;

    let state = AppState::new(pool, CorsConfig::from_env());
    let app = init_router(state);

    let address = server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(%address, "Server running");
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;

    Ok(())
}
