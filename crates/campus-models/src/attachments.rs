//! Attachment domain model.
//!
//! An attachment describes a file stored outside the database (referenced by
//! `external_url`). Teachers, courses and exams reference attachments through
//! their own join records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::ids::AttachmentId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Attachment {
    pub id: AttachmentId,
    pub label: String,
    pub description: Option<String>,
    /// MIME type, e.g. `application/pdf`.
    pub content_type: String,
    pub extension: String,
    pub external_url: String,
    /// Size in bytes.
    pub size: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
