//! Wall-clock seam.

use chrono::{DateTime, Utc};

/// Source of "now". Everything time-dependent takes the time from here so it
/// can be pinned in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
