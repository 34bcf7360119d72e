use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::CourseStatus;
use crate::ids::CourseId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub status: CourseStatus,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
