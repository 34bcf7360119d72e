use campus_models::{Guardian, GuardianId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Guardian {
    const TABLE: &'static str = "guardians";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "first_name",
        "middle_name",
        "last_name",
        "gender",
        "email_address",
        "native_language",
        "occupation",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(&self.title)
            .bind(&self.first_name)
            .bind(&self.middle_name)
            .bind(&self.last_name)
            .bind(self.gender)
            .bind(&self.email_address)
            .bind(&self.native_language)
            .bind(&self.occupation);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: GuardianId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
