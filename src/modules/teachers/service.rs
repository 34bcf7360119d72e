use campus_core::validation::{is_invalid_id, is_invalid_text, is_not_allowed, is_too_long};
use campus_models::limits::{CODE_LENGTH, NAME_LENGTH};
use campus_models::{Audit, Teacher, TeacherId, TeacherStatus};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type TeacherService = FoundationService<Teacher>;

impl Record for Teacher {
    type Key = TeacherId;

    const NAME: &'static str = "teacher";

    fn key(&self) -> TeacherId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &TeacherId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("user_id", is_invalid_id(self.user_id.as_uuid())),
            ("employee_number", is_invalid_text(&self.employee_number)),
            ("employee_number", is_too_long(&self.employee_number, CODE_LENGTH)),
            ("first_name", is_invalid_text(&self.first_name)),
            ("first_name", is_too_long(&self.first_name, NAME_LENGTH)),
            ("middle_name", is_invalid_text(&self.middle_name)),
            ("middle_name", is_too_long(&self.middle_name, NAME_LENGTH)),
            ("last_name", is_invalid_text(&self.last_name)),
            ("last_name", is_too_long(&self.last_name, NAME_LENGTH)),
        ]
    }

    fn create_rules(&self) -> Rules {
        vec![("status", is_not_allowed(&self.status, &[TeacherStatus::Active]))]
    }
}
