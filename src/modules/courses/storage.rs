use campus_models::{Course, CourseId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Course {
    const TABLE: &'static str = "courses";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "status",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.status);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: CourseId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
