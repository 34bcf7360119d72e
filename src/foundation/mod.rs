//! Foundation services: validation plus orchestration of the brokers.
//!
//! One generic [`FoundationService`] serves every entity. Entity-specific
//! behavior (name, key, field rules) comes from the entity's [`Record`]
//! implementation, found next to its controller in `modules/`.

pub mod errors;
pub mod record;
pub mod service;

pub use errors::{DependencyFailure, FoundationError, ValidationFailure};
pub use record::Record;
pub use service::FoundationService;
