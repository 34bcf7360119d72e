use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::ids::{AttachmentId, CourseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct CourseAttachmentKey {
    pub course_id: CourseId,
    pub attachment_id: AttachmentId,
}

impl fmt::Display for CourseAttachmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.course_id, self.attachment_id)
    }
}

/// Course material shared as an attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct CourseAttachment {
    pub course_id: CourseId,
    pub attachment_id: AttachmentId,
    pub notes: Option<String>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl CourseAttachment {
    pub fn key(&self) -> CourseAttachmentKey {
        CourseAttachmentKey {
            course_id: self.course_id,
            attachment_id: self.attachment_id,
        }
    }
}
