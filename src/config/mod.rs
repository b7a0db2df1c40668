//! Configuration loading and management for the Timeclock Engine.
//!
//! This module provides functionality to load the organisation timezone and
//! break schedule from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timeclock_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timeclock").unwrap();
//! println!("Loaded organisation: {}", config.organisation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BreakScheduleConfig, OrganisationConfig, TimeclockConfig};
