//! # Campus Config
//!
//! Configuration types for the Campus API, loaded from environment variables:
//!
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: Listen address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`logging`]: Log level and log file directory
//!
//! # Example
//!
//! ```ignore
//! use campus_config::{CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env()?;
//! let server = ServerConfig::from_env();
//! let cors = CorsConfig::from_env();
//! let logging = LoggingConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod logging;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
