use campus_core::validation::{
    is_earlier_date, is_invalid_date, is_invalid_id, is_invalid_precision, is_invalid_text,
    is_too_long,
};
use campus_models::limits::NAME_LENGTH;
use campus_models::{Audit, CalendarEntry, CalendarEntryId};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type CalendarEntryService = FoundationService<CalendarEntry>;

impl Record for CalendarEntry {
    type Key = CalendarEntryId;

    const NAME: &'static str = "calendar entry";

    fn key(&self) -> CalendarEntryId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &CalendarEntryId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("calendar_id", is_invalid_id(self.calendar_id.as_uuid())),
            ("label", is_invalid_text(&self.label)),
            ("label", is_too_long(&self.label, NAME_LENGTH)),
            ("start_date", is_invalid_date(self.start_date)),
            ("start_date", is_invalid_precision(self.start_date)),
            ("end_date", is_invalid_date(self.end_date)),
            ("end_date", is_invalid_precision(self.end_date)),
            ("end_date", is_earlier_date(self.end_date, self.start_date, "start_date")),
            (
                "remind_at",
                is_invalid_precision(self.remind_at.unwrap_or_default()),
            ),
        ]
    }
}
