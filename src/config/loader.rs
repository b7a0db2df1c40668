//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading timeclock
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{BreakEntitlementTable, Clock, SystemClock, TimeIntervalEngine};
use crate::error::{EngineError, EngineResult};
use crate::models::BreakDefinition;

use super::types::{BreakScheduleConfig, OrganisationConfig, TimeclockConfig};

/// Loads and provides access to timeclock configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/timeclock/
/// ├── organisation.yaml   # Organisation name and timezone
/// └── break_schedule.yaml # Duration bands and their breaks
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/timeclock").unwrap();
/// let breaks = loader.entitlement_for(Decimal::from(5)).unwrap();
/// println!("{} breaks owed in {}", breaks.len(), loader.timezone());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TimeclockConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/timeclock")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The timezone is not a known IANA zone
    /// - The break schedule violates its invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load organisation.yaml
        let organisation_path = path.join("organisation.yaml");
        let organisation = Self::load_yaml::<OrganisationConfig>(&organisation_path)?;

        // Load break_schedule.yaml
        let schedule_path = path.join("break_schedule.yaml");
        let schedule = Self::load_yaml::<BreakScheduleConfig>(&schedule_path)?;

        let loader = Self::from_parts(organisation, schedule)?;

        info!(
            path = %path.display(),
            organisation = %loader.organisation().name,
            timezone = %loader.timezone(),
            bands = loader.break_table().bands().len(),
            "Loaded timeclock configuration"
        );

        Ok(loader)
    }

    /// Builds a loader from already-parsed configuration.
    pub fn from_parts(
        organisation: OrganisationConfig,
        schedule: BreakScheduleConfig,
    ) -> EngineResult<Self> {
        let timezone = parse_timezone(&organisation.timezone)?;
        let break_table = BreakEntitlementTable::new(schedule.bands)?;

        Ok(Self {
            config: TimeclockConfig::new(organisation, timezone, break_table),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying timeclock configuration.
    pub fn config(&self) -> &TimeclockConfig {
        &self.config
    }

    /// Returns the organisation settings.
    pub fn organisation(&self) -> &OrganisationConfig {
        self.config.organisation()
    }

    /// Returns the organisation timezone.
    pub fn timezone(&self) -> Tz {
        self.config.timezone()
    }

    /// Returns the validated break schedule.
    pub fn break_table(&self) -> &BreakEntitlementTable {
        self.config.break_table()
    }

    /// Looks up the breaks owed for a shift of `shift_hours`.
    pub fn entitlement_for(&self, shift_hours: Decimal) -> EngineResult<&[BreakDefinition]> {
        self.break_table().entitlement_for(shift_hours)
    }

    /// Creates an interval engine in the organisation timezone that reads
    /// the system clock.
    pub fn engine(&self) -> TimeIntervalEngine<SystemClock> {
        TimeIntervalEngine::new(self.timezone())
    }

    /// Creates an interval engine in the organisation timezone with `clock`.
    pub fn engine_with_clock<C: Clock>(&self, clock: C) -> TimeIntervalEngine<C> {
        TimeIntervalEngine::with_clock(self.timezone(), clock)
    }
}

fn parse_timezone(name: &str) -> EngineResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| EngineError::UnknownTimezone {
            name: name.to_string(),
        })
}
