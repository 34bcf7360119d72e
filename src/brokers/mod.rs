//! Collaborators the foundation services depend on.
//!
//! Each broker is a trait so that services can be driven by in-memory
//! doubles in tests:
//!
//! - [`storage`]: CRUD over PostgreSQL
//! - [`date_time`]: the authoritative "now" used by recency checks
//! - [`logging`]: warning, error and critical events

pub mod date_time;
pub mod logging;
pub mod storage;

pub use date_time::{DateTimeBroker, SystemDateTimeBroker};
pub use logging::{LoggingBroker, TracingLoggingBroker};
pub use storage::{PgStorageBroker, StorageBroker, Table};
