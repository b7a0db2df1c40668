//! Elapsed duration model.
//!
//! [`ElapsedDuration`] is the normalized hours-and-minutes value returned by
//! every interval calculation in the engine.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative span of worked time in whole minutes.
///
/// `minutes` is always below 60; any overflow is carried into `hours`.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::ElapsedDuration;
///
/// let elapsed = ElapsedDuration::from_minutes(365);
/// assert_eq!(elapsed.hours, 6);
/// assert_eq!(elapsed.minutes, 5);
/// assert_eq!(elapsed.to_string(), "06:05");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawElapsed")]
pub struct ElapsedDuration {
    /// Whole hours.
    pub hours: u64,
    /// Remaining minutes, in `0..60`.
    pub minutes: u32,
}

impl ElapsedDuration {
    /// A zero-length duration.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
    };

    /// Builds a normalized duration from a count of minutes.
    pub fn from_minutes(total_minutes: u64) -> Self {
        Self {
            hours: total_minutes / 60,
            // Always < 60 so the narrowing is lossless.
            minutes: (total_minutes % 60) as u32,
        }
    }

    /// Builds a duration from separately accumulated hours and minutes,
    /// carrying minute overflow into hours.
    pub fn normalized(hours: u64, minutes: u64) -> Self {
        let carried = Self::from_minutes(minutes);
        Self {
            hours: hours + carried.hours,
            minutes: carried.minutes,
        }
    }

    /// Rounds a signed duration to the nearest whole minute.
    ///
    /// Returns `None` when the duration is negative. Half a minute rounds up.
    ///
    /// ```
    /// use chrono::Duration;
    /// use timeclock_engine::models::ElapsedDuration;
    ///
    /// let elapsed = ElapsedDuration::from_duration(Duration::seconds(8 * 3600 + 29 * 60 + 30));
    /// assert_eq!(elapsed, Some(ElapsedDuration { hours: 8, minutes: 30 }));
    /// assert_eq!(ElapsedDuration::from_duration(Duration::minutes(-1)), None);
    /// ```
    pub fn from_duration(duration: Duration) -> Option<Self> {
        let millis = duration.num_milliseconds();
        if millis < 0 {
            return None;
        }
        let total_minutes = (millis + 30_000) / 60_000;
        u64::try_from(total_minutes).ok().map(Self::from_minutes)
    }

    /// Total length in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + u64::from(self.minutes)
    }

    /// Length in fractional hours, for break schedule lookups.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use timeclock_engine::models::ElapsedDuration;
    ///
    /// let elapsed = ElapsedDuration { hours: 8, minutes: 30 };
    /// assert_eq!(elapsed.as_hours(), Decimal::new(85, 1));
    /// ```
    pub fn as_hours(&self) -> Decimal {
        Decimal::from(self.total_minutes()) / Decimal::from(60)
    }
}

/// Wire shape before minute overflow is carried into hours.
#[derive(Deserialize)]
struct RawElapsed {
    hours: u64,
    minutes: u64,
}

impl From<RawElapsed> for ElapsedDuration {
    fn from(raw: RawElapsed) -> Self {
        Self::normalized(raw.hours, raw.minutes)
    }
}

impl fmt::Display for ElapsedDuration {
    /// Formats as zero-padded `HH:mm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl Add for ElapsedDuration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::normalized(
            self.hours + rhs.hours,
            u64::from(self.minutes) + u64::from(rhs.minutes),
        )
    }
}

impl Sum for ElapsedDuration {
    /// Sums hours and minutes independently, then normalizes once.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let (hours, minutes) = iter.fold((0u64, 0u64), |(h, m), d| {
            (h + d.hours, m + u64::from(d.minutes))
        });
        Self::normalized(hours, minutes)
    }
}
