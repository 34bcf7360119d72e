pub mod controller;
pub mod router;
pub mod service;
pub mod storage;

pub use router::init_calendar_entries_router;
pub use service::CalendarEntryService;
