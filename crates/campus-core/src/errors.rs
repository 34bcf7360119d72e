//! HTTP-facing application error.
//!
//! Every handler returns `Result<_, AppError>`. The error renders as
//! `{"error": "...", "errors": {...}}` where `errors` is only present when
//! the failure carries per-field details (validation failures).

use std::collections::BTreeMap;

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Field name to the list of messages that field violated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub details: Option<Value>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            details: None,
        }
    }

    /// Attaches structured per-field details to the response body.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn locked<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::LOCKED, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({
                "error": self.error.to_string(),
                "errors": details,
            }),
            None => json!({
                "error": self.error.to_string()
            }),
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(
            AppError::not_found(anyhow!("missing")).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict(anyhow!("dup")).status,
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::locked(anyhow!("busy")).status, StatusCode::LOCKED);
        assert_eq!(
            AppError::internal(anyhow!("boom")).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_details_are_attached() {
        let err = AppError::bad_request(anyhow!("invalid"))
            .with_details(json!({ "id": ["Id is required"] }));

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.details, Some(json!({ "id": ["Id is required"] })));
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = AppError::bad_request(anyhow!("invalid")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
