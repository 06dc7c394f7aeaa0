use chrono::{DateTime, Utc};

/// Injectable time source.
///
/// Cache freshness and synthetic-fallback slot timestamps both depend on
/// "now"; taking it through a trait lets tests drive both deterministically.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
