use campus_core::validation::{
    is_invalid_date, is_invalid_id, is_invalid_precision, is_invalid_text, is_too_long,
};
use campus_models::limits::NAME_LENGTH;
use campus_models::{Audit, Exam, ExamId};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type ExamService = FoundationService<Exam>;

impl Record for Exam {
    type Key = ExamId;

    const NAME: &'static str = "exam";

    fn key(&self) -> ExamId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &ExamId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("label", is_invalid_text(&self.label)),
            ("label", is_too_long(&self.label, NAME_LENGTH)),
            ("date", is_invalid_date(self.date)),
            ("date", is_invalid_precision(self.date)),
        ]
    }
}
