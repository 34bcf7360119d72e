use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::AssignmentStatus;
use crate::ids::AssignmentId;

/// Work handed out to students, due by `deadline`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Assignment {
    pub id: AssignmentId,
    pub label: String,
    pub content: String,
    pub status: AssignmentStatus,
    pub deadline: DateTime<Utc>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
