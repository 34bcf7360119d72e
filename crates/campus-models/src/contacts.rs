use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::audit::Audit;
use crate::enums::ContactType;
use crate::ids::ContactId;

/// A way to reach someone. `information` is read according to `contact_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Contact {
    pub id: ContactId,
    #[schema(example = "+44 20 7946 0958")]
    pub information: String,
    pub notes: Option<String>,
    pub contact_type: ContactType,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}
