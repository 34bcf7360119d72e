use campus_core::validation::{
    is_invalid_date, is_invalid_id, is_invalid_precision, is_invalid_text, is_too_long,
};
use campus_models::limits::{CODE_LENGTH, NAME_LENGTH};
use campus_models::{Audit, Student, StudentId};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type StudentService = FoundationService<Student>;

impl Record for Student {
    type Key = StudentId;

    const NAME: &'static str = "student";

    fn key(&self) -> StudentId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &StudentId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("user_id", is_invalid_id(self.user_id.as_uuid())),
            ("identity_number", is_invalid_text(&self.identity_number)),
            ("identity_number", is_too_long(&self.identity_number, CODE_LENGTH)),
            ("first_name", is_invalid_text(&self.first_name)),
            ("first_name", is_too_long(&self.first_name, NAME_LENGTH)),
            (
                "middle_name",
                is_too_long(self.middle_name.as_deref().unwrap_or_default(), NAME_LENGTH),
            ),
            ("last_name", is_invalid_text(&self.last_name)),
            ("last_name", is_too_long(&self.last_name, NAME_LENGTH)),
            ("birth_date", is_invalid_date(self.birth_date)),
            ("birth_date", is_invalid_precision(self.birth_date)),
        ]
    }
}
