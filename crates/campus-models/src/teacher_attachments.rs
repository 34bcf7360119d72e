use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::ids::{AttachmentId, TeacherId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct TeacherAttachmentKey {
    pub teacher_id: TeacherId,
    pub attachment_id: AttachmentId,
}

impl fmt::Display for TeacherAttachmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.teacher_id, self.attachment_id)
    }
}

/// An [`Attachment`](crate::attachments::Attachment) filed on a teacher's record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct TeacherAttachment {
    pub teacher_id: TeacherId,
    pub attachment_id: AttachmentId,
    pub notes: Option<String>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl TeacherAttachment {
    pub fn key(&self) -> TeacherAttachmentKey {
        TeacherAttachmentKey {
            teacher_id: self.teacher_id,
            attachment_id: self.attachment_id,
        }
    }
}
