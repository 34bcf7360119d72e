use campus_models::{TeacherAttachment, TeacherAttachmentKey};

use crate::brokers::storage::{PgQueryAs, Table, bind_audit};

impl Table for TeacherAttachment {
    const TABLE: &'static str = "teacher_attachments";

    const KEY_COLUMNS: &'static [&'static str] = &["teacher_id", "attachment_id"];

    const COLUMNS: &'static [&'static str] = &[
        "teacher_id",
        "attachment_id",
        "notes",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
    ];

    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        let query = query
            .bind(self.teacher_id)
            .bind(self.attachment_id)
            .bind(&self.notes);

        bind_audit(&self.audit, query)
    }

    fn bind_key<'q>(key: TeacherAttachmentKey, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(key.teacher_id).bind(key.attachment_id)
    }
}
