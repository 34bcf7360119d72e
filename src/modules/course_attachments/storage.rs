use campus_models::{CourseAttachment, CourseAttachmentKey};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for CourseAttachment {
    const TABLE: &'static str = "course_attachments";

    const KEY_COLUMNS: &'static [&'static str] = &["course_id", "attachment_id"];

    const COLUMNS: &'static [&'static str] = &[
        "course_id",
        "attachment_id",
        "notes",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.course_id)
            .bind(self.attachment_id)
            .bind(&self.notes);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(key: CourseAttachmentKey, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(key.course_id).bind(key.attachment_id)
    }
}
