use campus_models::{Attachment, AttachmentId};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for Attachment {
    const TABLE: &'static str = "attachments";

    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "label",
        "description",
        "content_type",
        "extension",
        "external_url",
        "size",
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
            .bind(&self.content_type)
            .bind(&self.extension)
            .bind(&self.external_url)
            .bind(self.size);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(id: AttachmentId, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(id)
    }
}
