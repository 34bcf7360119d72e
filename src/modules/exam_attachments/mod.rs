pub mod controller;
pub mod router;
pub mod service;
pub mod storage;

pub use router::init_exam_attachments_router;
pub use service::ExamAttachmentService;
