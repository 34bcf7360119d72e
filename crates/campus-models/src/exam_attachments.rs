use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::ids::{AttachmentId, ExamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct ExamAttachmentKey {
    pub exam_id: ExamId,
    pub attachment_id: AttachmentId,
}

impl fmt::Display for ExamAttachmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.exam_id, self.attachment_id)
    }
}

/// An exam paper, answer key or other file attached to an exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct ExamAttachment {
    pub exam_id: ExamId,
    pub attachment_id: AttachmentId,
    pub notes: Option<String>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl ExamAttachment {
    pub fn key(&self) -> ExamAttachmentKey {
        ExamAttachmentKey {
            exam_id: self.exam_id,
            attachment_id: self.attachment_id,
        }
    }
}
