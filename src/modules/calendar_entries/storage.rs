use campus_models::{CalendarEntry, CalendarEntryId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for CalendarEntry {
    const TABLE: &'static str = "calendar_entries";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "calendar_id",
        "label",
        "description",
        "start_date",
        "end_date",
        "remind_at",
        "is_all_day",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.id)
            .bind(self.calendar_id)
            .bind(&self.label)
            .bind(&self.description)
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.remind_at)
            .bind(self.is_all_day);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: CalendarEntryId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
