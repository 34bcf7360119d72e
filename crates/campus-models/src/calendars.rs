use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::ids::CalendarId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Calendar {
    pub id: CalendarId,
    pub label: String,
    pub description: Option<String>,
    /// IANA time zone name the calendar is displayed in.
    #[schema(example = "Europe/London")]
    pub time_zone: String,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
