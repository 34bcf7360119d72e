use campus_models::{StudentGuardian, StudentGuardianKey};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for StudentGuardian {
    const TABLE: &'static str = "student_guardians";

    const KEY_COLUMNS: &'static [&'static str] = &["student_id", "guardian_id"];

    const COLUMNS: &'static [&'static str] = &[
        "student_id",
        "guardian_id",
        "relationship",
        "is_primary_contact",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.student_id)
            .bind(self.guardian_id)
            .bind(self.relationship)
            .bind(self.is_primary_contact);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(key: StudentGuardianKey, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(key.student_id).bind(key.guardian_id)
    }
}
