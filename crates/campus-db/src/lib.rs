//! # Campus DB
//!
//! Database pool initialization and storage error classification for the
//! Campus API.
//!
//! # Example
//!
//! ```ignore
//! use campus_config::DatabaseConfig;
//! use campus_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//!     Ok(())
//! }
//! ```

pub mod error;

use campus_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use error::StorageError;

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and is shared by every storage
/// broker in the application.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
