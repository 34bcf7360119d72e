//! Links between students and their guardians.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::GuardianRelationship;
use crate::ids::{GuardianId, StudentId};

/// Composite key of a [`StudentGuardian`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct StudentGuardianKey {
    pub student_id: StudentId,
    pub guardian_id: GuardianId,
}

impl fmt::Display for StudentGuardianKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.student_id, self.guardian_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct StudentGuardian {
    pub student_id: StudentId,
    pub guardian_id: GuardianId,
    pub relationship: GuardianRelationship,
    /// Whether the school contacts this guardian first.
    pub is_primary_contact: bool,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl StudentGuardian {
    pub fn key(&self) -> StudentGuardianKey {
        StudentGuardianKey {
            student_id: self.student_id,
            guardian_id: self.guardian_id,
        }
    }
}
