//! Configuration types for the timeclock.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::calculation::BreakEntitlementTable;
use crate::models::DurationBand;

fn default_timezone() -> String {
    "Pacific/Auckland".to_string()
}

/// Organisation settings from `organisation.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganisationConfig {
    /// The organisation's display name.
    pub name: String,
    /// IANA name of the zone all civil times are read in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// Break schedule file structure from `break_schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BreakScheduleConfig {
    /// Duration bands in ascending order.
    pub bands: Vec<DurationBand>,
}

/// The complete, validated timeclock configuration.
#[derive(Debug, Clone)]
pub struct TimeclockConfig {
    /// Organisation settings.
    organisation: OrganisationConfig,
    /// The resolved organisation timezone.
    timezone: Tz,
    /// The validated break schedule.
    break_table: BreakEntitlementTable,
}

impl TimeclockConfig {
    /// Creates a new TimeclockConfig from its validated parts.
    pub fn new(
        organisation: OrganisationConfig,
        timezone: Tz,
        break_table: BreakEntitlementTable,
    ) -> Self {
        Self {
            organisation,
            timezone,
            break_table,
        }
    }

    /// Returns the organisation settings.
    pub fn organisation(&self) -> &OrganisationConfig {
        &self.organisation
    }

    /// Returns the organisation timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the break schedule.
    pub fn break_table(&self) -> &BreakEntitlementTable {
        &self.break_table
    }
}
