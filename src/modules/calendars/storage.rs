use campus_models::{Calendar, CalendarId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Calendar {
    const TABLE: &'static str = "calendars";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "label",
        "description",
        "time_zone",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(&self.label)
            .bind(&self.description)
            .bind(&self.time_zone);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: CalendarId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
