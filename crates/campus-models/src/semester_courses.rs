//! A course as taught by one teacher over one semester.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::SemesterCourseStatus;
use crate::ids::{CourseId, SemesterCourseId, TeacherId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct SemesterCourse {
    pub id: SemesterCourseId,
    pub course_id: CourseId,
    pub teacher_id: TeacherId,
    pub start_date: DateTime<Utc>,
    /// Never earlier than `start_date`.
    pub end_date: DateTime<Utc>,
    pub status: SemesterCourseStatus,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
