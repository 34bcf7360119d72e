pub mod controller;
pub mod router;
pub mod service;
pub mod storage;

pub use router::init_exams_router;
pub use service::ExamService;
