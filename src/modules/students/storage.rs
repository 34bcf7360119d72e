use campus_models::{Student, StudentId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Student {
    const TABLE: &'static str = "students";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "user_id",
        "identity_number",
        "first_name",
        "middle_name",
        "last_name",
        "birth_date",
        "gender",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(self.user_id)
            .bind(&self.identity_number)
            .bind(&self.first_name)
            .bind(&self.middle_name)
            .bind(&self.last_name)
            .bind(self.birth_date)
            .bind(self.gender);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: StudentId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
