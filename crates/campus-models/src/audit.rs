//! Audit fields carried by every entity.
//!
//! Creation stamps both actor and time twice (`created_*` and `updated_*`
//! hold the same values); every later modification advances only the
//! `updated_*` pair.

use campus_core::validation::{
    Rule, is_invalid_date, is_invalid_id, is_invalid_precision, is_not_recent, is_not_same_date,
    is_not_same_id, is_same_date,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Audit {
    pub created_by: UserId,
    pub created_date: DateTime<Utc>,
    pub updated_by: UserId,
    pub updated_date: DateTime<Utc>,
}

impl Audit {
    /// Audit fields for a record created by `actor` at `at`.
    pub fn created(actor: UserId, at: DateTime<Utc>) -> Self {
        Self {
            created_by: actor,
            created_date: at,
            updated_by: actor,
            updated_date: at,
        }
    }

    /// Returns a copy stamped as modified by `actor` at `at`.
    pub fn touched(self, actor: UserId, at: DateTime<Utc>) -> Self {
        Self {
            updated_by: actor,
            updated_date: at,
            ..self
        }
    }

    fn required_rules(&self) -> [(&'static str, Rule); 6] {
        [
            ("created_by", is_invalid_id(self.created_by.as_uuid())),
            ("updated_by", is_invalid_id(self.updated_by.as_uuid())),
            ("created_date", is_invalid_date(self.created_date)),
            ("created_date", is_invalid_precision(self.created_date)),
            ("updated_date", is_invalid_date(self.updated_date)),
            ("updated_date", is_invalid_precision(self.updated_date)),
        ]
    }

    pub fn rules_on_create(&self, now: DateTime<Utc>) -> Vec<(&'static str, Rule)> {
        let mut rules = self.required_rules().to_vec();
        rules.extend([
            ("created_date", is_not_recent(self.created_date, now)),
            (
                "updated_by",
                is_not_same_id(
                    self.updated_by.as_uuid(),
                    self.created_by.as_uuid(),
                    "created_by",
                ),
            ),
            (
                "updated_date",
                is_not_same_date(self.updated_date, self.created_date, "created_date"),
            ),
        ]);
        rules
    }

    pub fn rules_on_modify(&self, now: DateTime<Utc>) -> Vec<(&'static str, Rule)> {
        let mut rules = self.required_rules().to_vec();
        rules.extend([
            (
                "updated_date",
                is_same_date(self.updated_date, self.created_date, "created_date"),
            ),
            ("updated_date", is_not_recent(self.updated_date, now)),
        ]);
        rules
    }

    /// Rules comparing an incoming modification with the stored record, in
    /// the order they are reported.
    pub fn rules_against_stored(&self, stored: &Audit) -> Vec<(&'static str, Rule)> {
        vec![
            (
                "created_date",
                is_not_same_date(self.created_date, stored.created_date, "created_date"),
            ),
            (
                "created_by",
                is_not_same_id(
                    self.created_by.as_uuid(),
                    stored.created_by.as_uuid(),
                    "created_by",
                ),
            ),
            (
                "updated_date",
                is_same_date(self.updated_date, stored.updated_date, "updated_date"),
            ),
        ]
    }
}
