use campus_core::validation::{is_invalid_id, is_invalid_text, is_too_long};
use campus_models::limits::{NAME_LENGTH, TAG_LENGTH};
use campus_models::{Attachment, AttachmentId, Audit};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type AttachmentService = FoundationService<Attachment>;

impl Record for Attachment {
    type Key = AttachmentId;

    const NAME: &'static str = "attachment";

    fn key(&self) -> AttachmentId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &AttachmentId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("label", is_invalid_text(&self.label)),
            ("label", is_too_long(&self.label, NAME_LENGTH)),
            ("content_type", is_invalid_text(&self.content_type)),
            ("content_type", is_too_long(&self.content_type, NAME_LENGTH)),
            ("extension", is_invalid_text(&self.extension)),
            ("extension", is_too_long(&self.extension, TAG_LENGTH)),
            ("external_url", is_invalid_text(&self.external_url)),
        ]
    }
}
