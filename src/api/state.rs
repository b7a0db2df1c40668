//! Application state for the Timeclock Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{Clock, SystemClock, TimeIntervalEngine};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded configuration and the clock used for live sessions.
#[derive(Clone)]
pub struct AppState {
    /// The loaded timeclock configuration.
    config: Arc<ConfigLoader>,
    /// Source of "now" for open records.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state that reads the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: impl Clock + 'static) -> Self {
        Self {
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns an interval engine bound to the configured timezone and clock.
    pub fn engine(&self) -> TimeIntervalEngine<Arc<dyn Clock>> {
        self.config.engine_with_clock(Arc::clone(&self.clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_engine_reads_injected_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 4, 0, 0).unwrap();
        let config = ConfigLoader::load("./config/timeclock").unwrap();
        let state = AppState::with_clock(config, FixedClock::new(instant));

        assert_eq!(state.engine().now().with_timezone(&Utc), instant);
    }
}
