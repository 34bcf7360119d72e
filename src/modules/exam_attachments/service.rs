use campus_core::validation::is_invalid_id;
use campus_models::{Audit, ExamAttachment, ExamAttachmentKey};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type ExamAttachmentService = FoundationService<ExamAttachment>;

impl Record for ExamAttachment {
    type Key = ExamAttachmentKey;

    const NAME: &'static str = "exam attachment";

    fn key(&self) -> ExamAttachmentKey {
        ExamAttachment::key(self)
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(key: &ExamAttachmentKey) -> Rules {
        vec![
            ("exam_id", is_invalid_id(key.exam_id.as_uuid())),
            ("attachment_id", is_invalid_id(key.attachment_id.as_uuid())),
        ]
    }

    fn field_rules(&self) -> Rules {
        Vec::new()
    }
}
