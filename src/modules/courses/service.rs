use campus_core::validation::{is_invalid_id, is_invalid_text, is_too_long};
use campus_models::limits::NAME_LENGTH;
use campus_models::{Audit, Course, CourseId};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type CourseService = FoundationService<Course>;

impl Record for Course {
    type Key = CourseId;

    const NAME: &'static str = "course";

    fn key(&self) -> CourseId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &CourseId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("name", is_invalid_text(&self.name)),
            ("name", is_too_long(&self.name, NAME_LENGTH)),
            ("description", is_invalid_text(&self.description)),
        ]
    }
}
