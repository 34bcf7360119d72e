use campus_models::{Exam, ExamId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Exam {
    const TABLE: &'static str = "exams";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "label",
        "exam_type",
        "date",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(&self.label)
            .bind(self.exam_type)
            .bind(self.date);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: ExamId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
