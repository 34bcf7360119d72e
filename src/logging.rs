use std::fs;
use std::io;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use campus_config::LoggingConfig;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs each request on arrival and on completion. The completion level
/// follows the status class: `warn` for 4xx, `error` for 5xx.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4();

    info!(%request_id, %method, %path, "Incoming request");

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(%request_id, %method, %path, status, latency_ms, "Server error");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %path, status, latency_ms, "Client error");
    } else {
        info!(%request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}

/// Installs the global subscriber: a compact console layer, a daily error
/// log and a daily JSON log, both under `config.directory`.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<()> {
    fs::create_dir_all(&config.directory)?;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME"),
            config.level
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.directory, "campus.log");

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // Structured logs for ingestion
    let json_appender = RollingFileAppender::new(Rotation::DAILY, &config.directory, "campus.json");

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .init();

    info!(directory = %config.directory, "Tracing initialized");

    Ok(())
}
