use campus_models::{SemesterCourse, SemesterCourseId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for SemesterCourse {
    const TABLE: &'static str = "semester_courses";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "course_id",
        "teacher_id",
        "start_date",
        "end_date",
        "status",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(self.course_id)
            .bind(self.teacher_id)
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.status);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: SemesterCourseId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
