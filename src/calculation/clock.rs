//! Sources of the current instant.
//!
//! The interval engine never reads the system clock directly; it asks a
//! [`Clock`]. Production code uses [`SystemClock`], tests pin time with
//! [`FixedClock`].

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Provides the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timeclock_engine::calculation::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2024, 3, 1, 4, 0, 0).unwrap();
/// assert_eq!(FixedClock::new(instant).now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
