use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::ExamType;
use crate::ids::ExamId;

/// A scheduled exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Exam {
    pub id: ExamId,
    pub label: String,
    pub exam_type: ExamType,
    /// When the exam takes place.
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
