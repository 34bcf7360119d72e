//! Guardian domain model.
//!
//! Guardians are linked to students through
//! [`StudentGuardian`](crate::student_guardians::StudentGuardian) records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::Gender;
use crate::ids::GuardianId;

/// A parent or other adult responsible for one or more students.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Guardian {
    pub id: GuardianId,
    /// Courtesy title such as "Mrs." or "Dr.".
    pub title: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub gender: Gender,
    #[schema(format = "email", example = "parent@example.com")]
    pub email_address: String,
    pub native_language: String,
    pub occupation: Option<String>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
