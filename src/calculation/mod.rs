//! Calculation logic for the Timeclock Engine.
//!
//! This module contains the break entitlement lookup, the elapsed-time
//! engine with its injectable clock, and timestamp parsing in the
//! organisation's timezone.

mod break_entitlement;
mod clock;
mod time_interval;
mod timestamp;

pub use break_entitlement::BreakEntitlementTable;
pub use clock::{Clock, FixedClock, SystemClock};
pub use time_interval::TimeIntervalEngine;
pub use timestamp::parse_timestamp;
