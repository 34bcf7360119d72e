use campus_core::validation::is_invalid_id;
use campus_models::{Audit, TeacherContact, TeacherContactKey};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type TeacherContactService = FoundationService<TeacherContact>;

impl Record for TeacherContact {
    type Key = TeacherContactKey;

    const NAME: &'static str = "teacher contact";

    fn key(&self) -> TeacherContactKey {
        TeacherContact::key(self)
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(key: &TeacherContactKey) -> Rules {
        vec![
            ("teacher_id", is_invalid_id(key.teacher_id.as_uuid())),
            ("contact_id", is_invalid_id(key.contact_id.as_uuid())),
        ]
    }

    fn field_rules(&self) -> Rules {
        Vec::new()
    }
}
