use campus_models::{TeacherContact, TeacherContactKey};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for TeacherContact {
    const TABLE: &'static str = "teacher_contacts";

    const KEY_COLUMNS: &'static [&'static str] = &["teacher_id", "contact_id"];

    const COLUMNS: &'static [&'static str] = &[
        "teacher_id",
        "contact_id",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query.bind(self.teacher_id).bind(self.contact_id);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(key: TeacherContactKey, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(key.teacher_id).bind(key.contact_id)
    }
}
