//! Classification of raw `sqlx` failures.
//!
//! Storage brokers convert every [`sqlx::Error`] into a [`StorageError`] so
//! that the foundation services can decide between a validation, dependency
//! or service failure without inspecting driver details.

use sqlx::error::DatabaseError;
use thiserror::Error;

/// `serialization_failure`
const SERIALIZATION_FAILURE: &str = "40001";
/// `deadlock_detected`
const DEADLOCK_DETECTED: &str = "40P01";
/// `lock_not_available`
const LOCK_NOT_AVAILABLE: &str = "55P03";
/// `not_null_violation`
const NOT_NULL_VIOLATION: &str = "23502";
/// `check_violation`
const CHECK_VIOLATION: &str = "23514";
/// Class 22, `data_exception`: value too long, out of range, bad format.
const DATA_EXCEPTION_CLASS: &str = "22";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Lock contention, or a row that disappeared between read and write.
    #[error("record is locked: {0}")]
    Locked(String),

    /// The row holds a value the schema does not accept.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The database refused the statement for a reason other than a key conflict.
    #[error("statement rejected: {0}")]
    Rejected(String),

    #[error("database connection failed")]
    Connection(#[source] sqlx::Error),

    #[error("unexpected storage failure")]
    Unexpected(#[source] sqlx::Error),
}

impl StorageError {
    fn from_database(db_err: &dyn DatabaseError) -> Self {
        let message = db_err.message().to_string();

        if db_err.is_unique_violation() {
            return Self::DuplicateKey(message);
        }

        if db_err.is_foreign_key_violation() {
            return Self::ForeignKeyViolation(message);
        }

        match db_err.code().as_deref() {
            Some(SERIALIZATION_FAILURE | DEADLOCK_DETECTED | LOCK_NOT_AVAILABLE) => {
                Self::Locked(message)
            }
            Some(NOT_NULL_VIOLATION | CHECK_VIOLATION) => Self::InvalidValue(message),
            Some(code) if code.starts_with(DATA_EXCEPTION_CLASS) => Self::InvalidValue(message),
            _ => Self::Rejected(message),
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            return Self::from_database(db_err.as_ref());
        }

        if matches!(
            err,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::Configuration(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        ) {
            Self::Connection(err)
        } else {
            Self::Unexpected(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::ErrorKind;
    use std::borrow::Cow;
    use std::error::Error as _;
    use std::fmt;

    #[derive(Debug)]
    struct PgFailure {
        code: &'static str,
    }

    impl fmt::Display for PgFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "postgres failure {}", self.code)
        }
    }

    impl std::error::Error for PgFailure {}

    impl DatabaseError for PgFailure {
        fn message(&self) -> &str {
            "postgres failure"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn database_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgFailure { code }))
    }

    #[test]
    fn test_unique_violation_is_duplicate_key() {
        assert!(matches!(
            StorageError::from(database_error("23505")),
            StorageError::DuplicateKey(_)
        ));
    }

    #[test]
    fn test_foreign_key_violation() {
        assert!(matches!(
            StorageError::from(database_error("23503")),
            StorageError::ForeignKeyViolation(_)
        ));
    }

    #[test]
    fn test_lock_codes_are_locked() {
        for code in ["40001", "40P01", "55P03"] {
            assert!(matches!(
                StorageError::from(database_error(code)),
                StorageError::Locked(_)
            ));
        }
    }

    #[test]
    fn test_data_exceptions_are_invalid_values() {
        for code in ["22001", "22003", "22P02", "23502", "23514"] {
            assert!(matches!(
                StorageError::from(database_error(code)),
                StorageError::InvalidValue(_)
            ));
        }
    }

    #[test]
    fn test_other_database_errors_are_rejected() {
        assert!(matches!(
            StorageError::from(database_error("42P01")),
            StorageError::Rejected(_)
        ));
    }

    #[test]
    fn test_pool_failures_are_connection_errors() {
        assert!(matches!(
            StorageError::from(sqlx::Error::PoolTimedOut),
            StorageError::Connection(_)
        ));
        assert!(matches!(
            StorageError::from(sqlx::Error::PoolClosed),
            StorageError::Connection(_)
        ));
    }

    #[test]
    fn test_io_failure_is_connection_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        assert!(matches!(
            StorageError::from(sqlx::Error::Io(io)),
            StorageError::Connection(_)
        ));
    }

    #[test]
    fn test_protocol_failure_is_unexpected() {
        let err = StorageError::from(sqlx::Error::Protocol("bad frame".to_string()));
        assert!(matches!(err, StorageError::Unexpected(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_row_not_found_is_unexpected() {
        assert!(matches!(
            StorageError::from(sqlx::Error::RowNotFound),
            StorageError::Unexpected(_)
        ));
    }
}
