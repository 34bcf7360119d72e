use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::{Gender, TeacherStatus};
use crate::ids::{TeacherId, UserId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Teacher {
    pub id: TeacherId,
    pub user_id: UserId,
    pub employee_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: Gender,
    /// New teachers always start out active.
    pub status: TeacherStatus,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
