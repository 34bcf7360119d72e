use campus_models::{Contact, ContactId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Contact {
    const TABLE: &'static str = "contacts";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "information",
        "notes",
        "contact_type",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(&self.information)
            .bind(&self.notes)
            .bind(self.contact_type);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: ContactId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
