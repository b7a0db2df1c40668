//! Timeclock Engine
//!
//! This crate computes worked time for clocked shifts and the mandatory
//! breaks owed for a shift of a given length, in a single organisation
//! timezone.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
