pub mod controller;
pub mod router;
pub mod service;
pub mod storage;

pub use router::init_student_guardians_router;
pub use service::StudentGuardianService;
