//! Error taxonomy of the foundation services.
//!
//! Every failure leaving a service is one of three categories, each keeping
//! its cause as `source`:
//!
//! - [`FoundationError::Validation`]: the caller sent something wrong
//! - [`FoundationError::Dependency`]: storage failed for an infrastructure reason
//! - [`FoundationError::Service`]: anything unexpected

use anyhow::anyhow;
use campus_core::AppError;
use campus_core::validation::error_map;
use campus_db::StorageError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ValidationFailure {
    #[error("The {entity} is null.")]
    Null { entity: &'static str },

    #[error("Invalid {entity}, fix the errors and try again.")]
    Invalid {
        entity: &'static str,
        #[source]
        errors: ValidationErrors,
    },

    #[error("Couldn't find {entity} with id: {key}.")]
    NotFound { entity: &'static str, key: String },

    #[error("A {entity} with the same id already exists.")]
    AlreadyExists {
        entity: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("The {entity} holds a value that cannot be stored.")]
    Unstorable {
        entity: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("The {entity} references a record that does not exist.")]
    InvalidReference {
        entity: &'static str,
        #[source]
        source: StorageError,
    },
}

#[derive(Debug, Error)]
pub enum DependencyFailure {
    #[error("Locked {entity} record exception, please try again later.")]
    Locked {
        entity: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("Failed {entity} storage operation.")]
    Storage {
        entity: &'static str,
        #[source]
        source: StorageError,
    },
}

#[derive(Debug, Error)]
pub enum FoundationError {
    #[error("Invalid input, contact support.")]
    Validation {
        entity: &'static str,
        #[source]
        source: ValidationFailure,
    },

    #[error("Service dependency error occurred, contact support.")]
    Dependency {
        entity: &'static str,
        #[source]
        source: DependencyFailure,
    },

    #[error("Service error occurred, contact support.")]
    Service {
        entity: &'static str,
        #[source]
        source: StorageError,
    },
}

impl FoundationError {
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Validation { entity, .. }
            | Self::Dependency { entity, .. }
            | Self::Service { entity, .. } => entity,
        }
    }

    /// Field errors when the failure is an invalid entity.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation {
                source: ValidationFailure::Invalid { errors, .. },
                ..
            } => Some(errors),
            _ => None,
        }
    }
}

impl From<FoundationError> for AppError {
    fn from(err: FoundationError) -> Self {
        match err {
            FoundationError::Validation { source, .. } => {
                let message = anyhow!(source.to_string());
                match source {
                    ValidationFailure::NotFound { .. } => AppError::not_found(message),
                    ValidationFailure::AlreadyExists { .. } => AppError::conflict(message),
                    ValidationFailure::Invalid { errors, .. } => AppError::bad_request(message)
                        .with_details(serde_json::json!(error_map(&errors))),
                    ValidationFailure::Null { .. }
                    | ValidationFailure::Unstorable { .. }
                    | ValidationFailure::InvalidReference { .. } => AppError::bad_request(message),
                }
            }
            FoundationError::Dependency {
                source: source @ DependencyFailure::Locked { .. },
                ..
            } => AppError::locked(anyhow!(source.to_string())),
            err @ (FoundationError::Dependency { .. } | FoundationError::Service { .. }) => {
                AppError::internal(anyhow!(err.to_string()))
            }
        }
    }
}
