//! Rule engine used to validate entities before they are persisted.
//!
//! A [`Rule`] is a precomputed condition plus the message reported when the
//! condition holds. Callers pair each rule with the field it guards and hand
//! the list to [`validate`], which evaluates every pair and aggregates the
//! violations into a [`ValidationErrors`] keyed by field name.
//!
//! ```ignore
//! validate([
//!     ("id", is_invalid_id(teacher.id.as_uuid())),
//!     ("first_name", is_invalid_text(&teacher.first_name)),
//!     ("updated_by", is_not_same_id(updated_by, created_by, "created_by")),
//! ])?;
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Timelike, Utc};
use uuid::Uuid;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

/// How far a timestamp may drift from the current time and still count as recent.
pub const RECENT_WINDOW_MINUTES: i64 = 1;

/// A single validation check. `condition` is `true` when the checked value is invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub condition: bool,
    pub code: &'static str,
    pub message: Cow<'static, str>,
}

impl Rule {
    pub fn new(condition: bool, code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            condition,
            code,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_violated(&self) -> bool {
        self.condition
    }

    fn into_error(self) -> ValidationError {
        let mut error = ValidationError::new(self.code);
        error.message = Some(self.message);
        error
    }
}

pub fn is_invalid_id(id: &Uuid) -> Rule {
    Rule::new(id.is_nil(), "required", "Id is required")
}

pub fn is_invalid_text(text: &str) -> Rule {
    Rule::new(text.trim().is_empty(), "required", "Text is required")
}

/// A timestamp still holding its default (the Unix epoch) was never set.
pub fn is_invalid_date(date: DateTime<Utc>) -> Rule {
    Rule::new(date == DateTime::<Utc>::default(), "required", "Date is required")
}

/// Storage keeps microseconds, so a finer timestamp would not survive a round trip.
pub fn is_invalid_precision(date: DateTime<Utc>) -> Rule {
    Rule::new(
        date.nanosecond() % 1_000 != 0,
        "precision",
        "Date precision is invalid",
    )
}

/// Length is counted in characters, as `VARCHAR(n)` counts it.
pub fn is_too_long(text: &str, max: usize) -> Rule {
    Rule::new(
        text.chars().count() > max,
        "length",
        format!("Text exceeds {max} characters"),
    )
}

pub fn is_not_allowed<T: PartialEq>(value: &T, allowed: &[T]) -> Rule {
    Rule::new(!allowed.contains(value), "invalid", "Value is invalid")
}

pub fn is_invalid_email(text: &str) -> Rule {
    Rule::new(!text.validate_email(), "email", "Email is invalid")
}

pub fn is_not_same_id(first: &Uuid, second: &Uuid, second_name: &str) -> Rule {
    Rule::new(
        first != second,
        "mismatch",
        format!("Id is not the same as {second_name}"),
    )
}

pub fn is_not_same_date(first: DateTime<Utc>, second: DateTime<Utc>, second_name: &str) -> Rule {
    Rule::new(
        first != second,
        "mismatch",
        format!("Date is not the same as {second_name}"),
    )
}

pub fn is_same_date(first: DateTime<Utc>, second: DateTime<Utc>, second_name: &str) -> Rule {
    Rule::new(
        first == second,
        "unchanged",
        format!("Date is the same as {second_name}"),
    )
}

pub fn is_earlier_date(first: DateTime<Utc>, second: DateTime<Utc>, second_name: &str) -> Rule {
    Rule::new(
        first < second,
        "range",
        format!("Date is earlier than {second_name}"),
    )
}

/// Holds when `date` lies more than [`RECENT_WINDOW_MINUTES`] away from `now`,
/// in the past or in the future.
pub fn is_not_recent(date: DateTime<Utc>, now: DateTime<Utc>) -> Rule {
    let window = Duration::minutes(RECENT_WINDOW_MINUTES);
    let difference = now - date;

    Rule::new(
        difference > window || difference < -window,
        "recent",
        "Date is not recent",
    )
}

/// Evaluates every rule and collects all violations.
pub fn validate<I>(rules: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = (&'static str, Rule)>,
{
    let mut errors = ValidationErrors::new();

    for (field, rule) in rules {
        if rule.is_violated() {
            errors.add(field, rule.into_error());
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Evaluates rules in order and stops at the first violation.
pub fn validate_first<I>(rules: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = (&'static str, Rule)>,
{
    match rules.into_iter().find(|(_, rule)| rule.is_violated()) {
        Some((field, rule)) => {
            let mut errors = ValidationErrors::new();
            errors.add(field, rule.into_error());
            Err(errors)
        }
        None => Ok(()),
    }
}

/// Flattens [`ValidationErrors`] into field name to messages, sorted by field.
pub fn error_map(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
