//! Student domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::Gender;
use crate::ids::{StudentId, UserId};

/// A student enrolled in the school.
///
/// Missing JSON fields fall back to their defaults so that the validation
/// rules, not the JSON parser, report what is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Student {
    pub id: StudentId,
    pub user_id: UserId,
    /// School-issued identity number.
    pub identity_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birth_date: DateTime<Utc>,
    pub gender: Gender,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
