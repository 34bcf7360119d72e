use campus_core::validation::{is_invalid_id, is_invalid_text, is_too_long};
use campus_models::limits::{CODE_LENGTH, NAME_LENGTH};
use campus_models::{Audit, Calendar, CalendarId};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type CalendarService = FoundationService<Calendar>;

impl Record for Calendar {
    type Key = CalendarId;

    const NAME: &'static str = "calendar";

    fn key(&self) -> CalendarId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &CalendarId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("label", is_invalid_text(&self.label)),
            ("label", is_too_long(&self.label, NAME_LENGTH)),
            ("time_zone", is_invalid_text(&self.time_zone)),
            ("time_zone", is_too_long(&self.time_zone, CODE_LENGTH)),
        ]
    }
}
