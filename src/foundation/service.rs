use std::sync::Arc;

use campus_core::validation::{self, Rule};
use campus_db::StorageError;
use tracing::instrument;
use validator::ValidationErrors;

use crate::brokers::{DateTimeBroker, LoggingBroker, StorageBroker};
use crate::foundation::errors::{DependencyFailure, FoundationError, ValidationFailure};
use crate::foundation::record::Record;

/// What went wrong before it is categorized and logged.
enum Failure {
    Validation(ValidationFailure),
    Storage(StorageError),
}

impl From<ValidationFailure> for Failure {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

impl From<StorageError> for Failure {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Validates entities of type `E` and persists them through a [`StorageBroker`].
pub struct FoundationService<E: Record> {
    storage: Arc<dyn StorageBroker<E>>,
    date_time: Arc<dyn DateTimeBroker>,
    logging: Arc<dyn LoggingBroker>,
}

impl<E: Record> Clone for FoundationService<E> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            date_time: Arc::clone(&self.date_time),
            logging: Arc::clone(&self.logging),
        }
    }
}

impl<E: Record> FoundationService<E> {
    pub fn new(
        storage: Arc<dyn StorageBroker<E>>,
        date_time: Arc<dyn DateTimeBroker>,
        logging: Arc<dyn LoggingBroker>,
    ) -> Self {
        Self {
            storage,
            date_time,
            logging,
        }
    }

    /// Validates a new entity and inserts it. `None` stands for a missing body.
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn add(&self, entity: Option<E>) -> Result<E, FoundationError> {
        let result: Result<E, Failure> = async {
            let entity = Self::require(entity)?;
            self.validate_on_create(&entity)?;

            Ok(self.storage.insert(&entity).await?)
        }
        .await;

        self.categorize(result)
    }

    /// Every stored entity. An empty result is logged as a warning, not an error.
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn retrieve_all(&self) -> Result<Vec<E>, FoundationError> {
        let result: Result<Vec<E>, Failure> = async {
            let entities = self.storage.select_all().await?;

            if entities.is_empty() {
                self.logging
                    .log_warning(&format!("No {}s found in storage.", E::NAME));
            }

            Ok(entities)
        }
        .await;

        self.categorize(result)
    }

    #[instrument(skip_all, fields(entity = E::NAME, key = %key))]
    pub async fn retrieve_by_id(&self, key: E::Key) -> Result<E, FoundationError> {
        let result: Result<E, Failure> = async {
            Self::validate_key(&key)?;

            self.select_existing(key).await
        }
        .await;

        self.categorize(result)
    }

    /// Validates a modified entity, cross-checks it against the stored one
    /// and writes it back.
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn modify(&self, entity: Option<E>) -> Result<E, FoundationError> {
        let result: Result<E, Failure> = async {
            let entity = Self::require(entity)?;
            self.validate_on_modify(&entity)?;

            let stored = self.select_existing(entity.key()).await?;
            Self::validate_against_stored(&entity, &stored)?;

            Ok(self.storage.update(&entity).await?)
        }
        .await;

        self.categorize(result)
    }

    /// Deletes the entity stored under `key` and returns it.
    #[instrument(skip_all, fields(entity = E::NAME, key = %key))]
    pub async fn remove_by_id(&self, key: E::Key) -> Result<E, FoundationError> {
        let result: Result<E, Failure> = async {
            Self::validate_key(&key)?;

            let stored = self.select_existing(key).await?;

            Ok(self.storage.delete(&stored).await?)
        }
        .await;

        self.categorize(result)
    }

    fn require(entity: Option<E>) -> Result<E, ValidationFailure> {
        entity.ok_or(ValidationFailure::Null { entity: E::NAME })
    }

    async fn select_existing(&self, key: E::Key) -> Result<E, Failure> {
        self.storage.select_by_id(key).await?.ok_or_else(|| {
            Failure::Validation(ValidationFailure::NotFound {
                entity: E::NAME,
                key: key.to_string(),
            })
        })
    }

    fn validate_on_create(&self, entity: &E) -> Result<(), ValidationFailure> {
        let now = self.date_time.current_date_time();

        let rules = E::key_rules(&entity.key())
            .into_iter()
            .chain(entity.field_rules())
            .chain(entity.create_rules())
            .chain(entity.audit().rules_on_create(now));

        validation::validate(rules).map_err(Self::invalid)
    }

    fn validate_on_modify(&self, entity: &E) -> Result<(), ValidationFailure> {
        let now = self.date_time.current_date_time();

        let rules = E::key_rules(&entity.key())
            .into_iter()
            .chain(entity.field_rules())
            .chain(entity.audit().rules_on_modify(now));

        validation::validate(rules).map_err(Self::invalid)
    }

    fn validate_key(key: &E::Key) -> Result<(), ValidationFailure> {
        validation::validate(E::key_rules(key)).map_err(Self::invalid)
    }

    /// Creation provenance is immutable and `updated_date` must have moved.
    /// Only the first mismatch is reported.
    fn validate_against_stored(entity: &E, stored: &E) -> Result<(), ValidationFailure> {
        let rules: Vec<(&'static str, Rule)> = entity.audit().rules_against_stored(stored.audit());

        validation::validate_first(rules).map_err(Self::invalid)
    }

    fn invalid(errors: ValidationErrors) -> ValidationFailure {
        ValidationFailure::Invalid {
            entity: E::NAME,
            errors,
        }
    }

    /// Wraps a failure into its category and logs it at the category's level.
    fn categorize<T>(&self, result: Result<T, Failure>) -> Result<T, FoundationError> {
        result.map_err(|failure| {
            let entity = E::NAME;

            let (error, critical) = match failure {
                Failure::Validation(source) => {
                    (FoundationError::Validation { entity, source }, false)
                }
                Failure::Storage(source @ StorageError::DuplicateKey(_)) => (
                    FoundationError::Validation {
                        entity,
                        source: ValidationFailure::AlreadyExists { entity, source },
                    },
                    false,
                ),
                Failure::Storage(source @ StorageError::ForeignKeyViolation(_)) => (
                    FoundationError::Validation {
                        entity,
                        source: ValidationFailure::InvalidReference { entity, source },
                    },
                    false,
                ),
                Failure::Storage(source @ StorageError::InvalidValue(_)) => (
                    FoundationError::Validation {
                        entity,
                        source: ValidationFailure::Unstorable { entity, source },
                    },
                    false,
                ),
                Failure::Storage(source @ StorageError::Locked(_)) => (
                    FoundationError::Dependency {
                        entity,
                        source: DependencyFailure::Locked { entity, source },
                    },
                    false,
                ),
                Failure::Storage(source @ StorageError::Rejected(_)) => (
                    FoundationError::Dependency {
                        entity,
                        source: DependencyFailure::Storage { entity, source },
                    },
                    false,
                ),
                Failure::Storage(source @ StorageError::Connection(_)) => (
                    FoundationError::Dependency {
                        entity,
                        source: DependencyFailure::Storage { entity, source },
                    },
                    true,
                ),
                Failure::Storage(source @ StorageError::Unexpected(_)) => {
                    (FoundationError::Service { entity, source }, true)
                }
            };

            if critical {
                self.logging.log_critical(&error);
            } else {
                self.logging.log_error(&error);
            }

            error
        })
    }
}
