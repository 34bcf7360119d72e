use campus_core::validation::{
    is_earlier_date, is_invalid_date, is_invalid_id, is_invalid_precision, is_invalid_text,
    is_too_long,
};
use campus_models::limits::NAME_LENGTH;
use campus_models::{Assignment, AssignmentId, Audit};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type AssignmentService = FoundationService<Assignment>;

impl Record for Assignment {
    type Key = AssignmentId;

    const NAME: &'static str = "assignment";

    fn key(&self) -> AssignmentId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &AssignmentId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("label", is_invalid_text(&self.label)),
            ("label", is_too_long(&self.label, NAME_LENGTH)),
            ("content", is_invalid_text(&self.content)),
            ("deadline", is_invalid_date(self.deadline)),
            ("deadline", is_invalid_precision(self.deadline)),
        ]
    }

    /// An assignment cannot be handed out already overdue.
    fn create_rules(&self) -> Rules {
        vec![(
            "deadline",
            is_earlier_date(self.deadline, self.audit.created_date, "created_date"),
        )]
    }
}
