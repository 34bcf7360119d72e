use chrono::{DateTime, SubsecRound, Utc};

pub trait DateTimeBroker: Send + Sync {
    fn current_date_time(&self) -> DateTime<Utc>;
}

/// Reads the system clock, truncated to the microsecond precision PostgreSQL stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateTimeBroker;

impl DateTimeBroker for SystemDateTimeBroker {
    fn current_date_time(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
