//! # Campus Core
//!
//! Core types shared by every layer of the Campus API:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`validation`]: The rule engine used by the foundation services to
//!   check entities before they reach storage
//!
//! # Example
//!
//! ```ignore
//! use campus_core::validation::{self, is_invalid_text, is_not_recent};
//!
//! validation::validate([
//!     ("first_name", is_invalid_text(&student.first_name)),
//!     ("created_date", is_not_recent(student.created_date, now)),
//! ])?;
//! ```

pub mod errors;
pub mod validation;

pub use errors::{AppError, ErrorResponse};
pub use validation::{Rule, validate};
