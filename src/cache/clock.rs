//! Time source abstraction for the connection cache

#[cfg(test)]
use mockall::automock;

use chrono::{DateTime, Utc};

/// Trait providing the current wall-clock time
///
/// The cache records insertion timestamps through this trait so tests can
/// construct a cache with a pinned clock instead of sleeping.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
