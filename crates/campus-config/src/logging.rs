use std::env;

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub directory: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            directory: env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string()),
        }
    }
}
