use campus_models::{Assignment, AssignmentId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Assignment {
    const TABLE: &'static str = "assignments";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "label",
        "content",
        "status",
        "deadline",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(&self.label)
            .bind(&self.content)
            .bind(self.status)
            .bind(self.deadline);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: AssignmentId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
