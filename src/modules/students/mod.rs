pub mod controller;
pub mod router;
pub mod service;
pub mod storage;

pub use router::init_students_router;
pub use service::StudentService;
