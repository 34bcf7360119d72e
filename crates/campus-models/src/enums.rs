//! Enumerations stored as `INTEGER` discriminants.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Gender {
    #[default]
    Female = 0,
    Male = 1,
    Other = 2,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum TeacherStatus {
    #[default]
    Active = 0,
    Inactive = 1,
    OnLeave = 2,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum CourseStatus {
    #[default]
    Available = 0,
    Unavailable = 1,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ExamType {
    #[default]
    Written = 0,
    Oral = 1,
    Practical = 2,
}

/// How a guardian relates to a student.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum GuardianRelationship {
    #[default]
    Mother = 0,
    Father = 1,
    Guardian = 2,
    Other = 3,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum AssignmentStatus {
    #[default]
    Active = 0,
    /// Kept for the record but not shown to students.
    Hidden = 1,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum SemesterCourseStatus {
    #[default]
    Active = 0,
    Inactive = 1,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ContactType {
    #[default]
    Phone = 0,
    Email = 1,
    Address = 2,
    Other = 3,
}
