use campus_core::validation::{
    is_earlier_date, is_invalid_date, is_invalid_id, is_invalid_precision,
};
use campus_models::{Audit, SemesterCourse, SemesterCourseId};

use crate::foundation::FoundationService;
use crate::foundation::record::{Record, Rules};

pub type SemesterCourseService = FoundationService<SemesterCourse>;

impl Record for SemesterCourse {
    type Key = SemesterCourseId;

    const NAME: &'static str = "semester course";

    fn key(&self) -> SemesterCourseId {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn key_rules(id: &SemesterCourseId) -> Rules {
        vec![("id", is_invalid_id(id.as_uuid()))]
    }

    fn field_rules(&self) -> Rules {
        vec![
            ("course_id", is_invalid_id(self.course_id.as_uuid())),
            ("teacher_id", is_invalid_id(self.teacher_id.as_uuid())),
            ("start_date", is_invalid_date(self.start_date)),
            ("start_date", is_invalid_precision(self.start_date)),
            ("end_date", is_invalid_date(self.end_date)),
            ("end_date", is_invalid_precision(self.end_date)),
            ("end_date", is_earlier_date(self.end_date, self.start_date, "start_date")),
        ]
    }
}
