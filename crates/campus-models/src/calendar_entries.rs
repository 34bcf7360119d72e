use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::ids::{CalendarEntryId, CalendarId};

/// An event on a [`Calendar`](crate::calendars::Calendar).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct CalendarEntry {
    pub id: CalendarEntryId,
    pub calendar_id: CalendarId,
    pub label: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    /// Never earlier than `start_date`.
    pub end_date: DateTime<Utc>,
    pub remind_at: Option<DateTime<Utc>>,
    pub is_all_day: bool,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
