use campus_core::validation::is_invalid_id;
use campus_models::{Audit, CourseAttachment, CourseAttachmentKey};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type CourseAttachmentService = FoundationService<CourseAttachment>;

impl Record for CourseAttachment {
    type Key = CourseAttachmentKey;

    const NAME: &'static str = "course attachment";

    fn key(&self) -> CourseAttachmentKey {
        CourseAttachment::key(self)
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(key: &CourseAttachmentKey) -> Rules {
        vec![
            ("course_id", is_invalid_id(key.course_id.as_uuid())),
            ("attachment_id", is_invalid_id(key.attachment_id.as_uuid())),
        ]
    }

    fn field_rules(&self) -> Rules {
        Vec::new()
    }
}
