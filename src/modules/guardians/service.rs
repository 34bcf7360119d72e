use campus_core::validation::{is_invalid_email, is_invalid_id, is_invalid_text, is_too_long};
use campus_models::limits::{CODE_LENGTH, NAME_LENGTH, TAG_LENGTH};
use campus_models::{Audit, Guardian, GuardianId};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type GuardianService = FoundationService<Guardian>;

/// Guardians have no user account, so only their contact details are checked.
impl Record for Guardian {
    type Key = GuardianId;

    const NAME: &'static str = "guardian";

    fn key(&self) -> GuardianId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &GuardianId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            (
                "title",
                is_too_long(self.title.as_deref().unwrap_or_default(), TAG_LENGTH),
            ),
            ("first_name", is_invalid_text(&self.first_name)),
            ("first_name", is_too_long(&self.first_name, NAME_LENGTH)),
            (
                "middle_name",
                is_too_long(self.middle_name.as_deref().unwrap_or_default(), NAME_LENGTH),
            ),
            ("last_name", is_invalid_text(&self.last_name)),
            ("last_name", is_too_long(&self.last_name, NAME_LENGTH)),
            ("email_address", is_invalid_text(&self.email_address)),
            ("email_address", is_invalid_email(&self.email_address)),
            ("email_address", is_too_long(&self.email_address, NAME_LENGTH)),
            ("native_language", is_invalid_text(&self.native_language)),
            ("native_language", is_too_long(&self.native_language, CODE_LENGTH)),
            (
                "occupation",
                is_too_long(self.occupation.as_deref().unwrap_or_default(), NAME_LENGTH),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::validation::{error_map, validate};

    #[test]
    fn test_blank_email_reports_both_rules() {
        let guardian = Guardian::default();
        let errors = validate(guardian.field_rules()).unwrap_err();
        let map = error_map(&errors);

        assert_eq!(
            map["email_address"],
            vec!["Text is required", "Email is invalid"]
        );
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let guardian = Guardian {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            native_language: "English".to_string(),
            email_address: "grace.hopper".to_string(),
            ..Default::default()
        };

        let map = error_map(&validate(guardian.field_rules()).unwrap_err());
        assert_eq!(map.len(), 1);
        assert_eq!(map["email_address"], vec!["Email is invalid"]);
    }
}
