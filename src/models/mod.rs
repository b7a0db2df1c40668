//! Core data models for the Timeclock Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod break_definition;
mod elapsed;
mod elapsed_summary;
mod employee;
mod shift_record;

pub use break_definition::{BreakDefinition, BreakType, DurationBand, total_break_minutes};
pub use elapsed::ElapsedDuration;
pub use elapsed_summary::{ElapsedSummary, RecordContribution, RecordStatus};
pub use employee::{BreakTaken, CurrentBreak, Employee};
pub use shift_record::ShiftRecord;
