use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::ids::{ContactId, TeacherId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct TeacherContactKey {
    pub teacher_id: TeacherId,
    pub contact_id: ContactId,
}

impl fmt::Display for TeacherContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.teacher_id, self.contact_id)
    }
}

/// Links a teacher to one of their [`Contact`](crate::contacts::Contact)s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct TeacherContact {
    pub teacher_id: TeacherId,
    pub contact_id: ContactId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl TeacherContact {
    pub fn key(&self) -> TeacherContactKey {
        TeacherContactKey {
            teacher_id: self.teacher_id,
            contact_id: self.contact_id,
        }
    }
}
