use campus_core::validation::{is_invalid_email, is_invalid_id, is_invalid_text, is_too_long};
use campus_models::limits::NAME_LENGTH;
use campus_models::{Audit, Contact, ContactId, ContactType};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type ContactService = FoundationService<Contact>;

impl Record for Contact {
    type Key = ContactId;

    const NAME: &'static str = "contact";

    fn key(&self) -> ContactId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &ContactId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        let mut rules = vec![
            ("information", is_invalid_text(&self.information)),
            ("information", is_too_long(&self.information, NAME_LENGTH)),
        ];

        if self.contact_type == ContactType::Email {
            rules.push(("information", is_invalid_email(&self.information)));
        }

        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::validation::{error_map, validate};

    #[test]
    fn test_email_contacts_must_hold_an_email() {
        let contact = Contact {
            information: "+44 20 7946 0958".to_string(),
            contact_type: ContactType::Email,
            ..Default::default()
        };
        let map = error_map(&validate(contact.field_rules()).unwrap_err());
        assert_eq!(map["information"], vec!["Email is invalid"]);

        let phone = Contact {
            contact_type: ContactType::Phone,
            ..contact
        };
        assert!(validate(phone.field_rules()).is_ok());
    }
}
