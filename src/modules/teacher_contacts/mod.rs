pub mod controller;
pub mod router;
pub mod service;
pub mod storage;

pub use router::init_teacher_contacts_router;
pub use service::TeacherContactService;
