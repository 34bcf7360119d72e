use campus_core::validation::is_invalid_id;
use campus_models::{Audit, TeacherAttachment, TeacherAttachmentKey};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type TeacherAttachmentService = FoundationService<TeacherAttachment>;

impl Record for TeacherAttachment {
    type Key = TeacherAttachmentKey;

    const NAME: &'static str = "teacher attachment";

    fn key(&self) -> TeacherAttachmentKey {
        TeacherAttachment::key(self)
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(key: &TeacherAttachmentKey) -> Rules {
        vec![
            ("teacher_id", is_invalid_id(key.teacher_id.as_uuid())),
            ("attachment_id", is_invalid_id(key.attachment_id.as_uuid())),
        ]
    }

    fn field_rules(&self) -> Rules {
        Vec::new()
    }
}
