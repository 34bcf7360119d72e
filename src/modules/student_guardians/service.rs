use campus_core::validation::is_invalid_id;
use campus_models::{Audit, StudentGuardian, StudentGuardianKey};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type StudentGuardianService = FoundationService<StudentGuardian>;

impl Record for StudentGuardian {
    type Key = StudentGuardianKey;

    const NAME: &'static str = "student guardian";

    fn key(&self) -> StudentGuardianKey {
        StudentGuardian::key(self)
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(key: &StudentGuardianKey) -> Rules {
        vec![
            ("student_id", is_invalid_id(key.student_id.as_uuid())),
            ("guardian_id", is_invalid_id(key.guardian_id.as_uuid())),
        ]
    }

    fn field_rules(&self) -> Rules {
        Vec::new()
    }
}
