use campus_models::{Teacher, TeacherId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Teacher {
    const TABLE: &'static str = "teachers";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "user_id",
        "employee_number",
        "first_name",
        "middle_name",
        "last_name",
        "gender",
        "status",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(self.user_id)
            .bind(&self.employee_number)
            .bind(&self.first_name)
            .bind(&self.middle_name)
            .bind(&self.last_name)
            .bind(self.gender)
            .bind(self.status);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: TeacherId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
