//! Break entitlement lookup.
//!
//! This module provides the [`BreakEntitlementTable`], an ordered schedule of
//! duration bands that maps a shift length to the mandatory breaks owed for
//! it. Longer bands always extend the break list of the band before them.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{BreakDefinition, BreakType, DurationBand};

const PAID_REST: u32 = 10;
const UNPAID_MEAL: u32 = 30;

/// A validated, read-only break schedule.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::BreakEntitlementTable;
/// use rust_decimal::Decimal;
///
/// let table = BreakEntitlementTable::standard();
/// let breaks = table.entitlement_for(Decimal::from(5)).unwrap();
/// assert_eq!(breaks.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakEntitlementTable {
    bands: Vec<DurationBand>,
}

impl BreakEntitlementTable {
    /// Builds a table from `bands`, checking the schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBreakSchedule`] if:
    /// - there are no bands
    /// - a band is empty, negative, or out of order
    /// - two neighbouring bands overlap or leave a gap
    /// - a band's breaks have a zero duration or repeat an id
    /// - a band's breaks are not a strict extension of the previous band's
    pub fn new(bands: Vec<DurationBand>) -> EngineResult<Self> {
        if bands.is_empty() {
            return Err(invalid("schedule has no bands"));
        }

        for (position, band) in bands.iter().enumerate() {
            if band.min_hours < Decimal::ZERO {
                return Err(invalid(format!(
                    "band {} starts at negative {} hours",
                    position, band.min_hours
                )));
            }
            if band.min_hours >= band.max_hours {
                return Err(invalid(format!(
                    "band {} is empty: [{}, {})",
                    position, band.min_hours, band.max_hours
                )));
            }
            validate_breaks(position, &band.breaks)?;
        }

        for (position, pair) in bands.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            let position = position + 1;

            if current.min_hours != previous.max_hours {
                return Err(invalid(format!(
                    "band {} starts at {} hours but band {} ends at {} hours",
                    position,
                    current.min_hours,
                    position - 1,
                    previous.max_hours
                )));
            }

            let extends = current.breaks.len() > previous.breaks.len()
                && current.breaks.starts_with(&previous.breaks);
            if !extends {
                return Err(invalid(format!(
                    "band {} does not extend the breaks of band {}",
                    position,
                    position - 1
                )));
            }
        }

        Ok(Self { bands })
    }

    /// The built-in schedule.
    ///
    /// | hours     | breaks                                        |
    /// |-----------|-----------------------------------------------|
    /// | [2, 4)    | 10 paid                                       |
    /// | [4, 6)    | 10 paid, 30 unpaid                            |
    /// | [6, 10)   | 10 paid, 30 unpaid, 10 paid                   |
    /// | [10, 12)  | 10 paid, 30 unpaid, 10 paid, 10 paid          |
    /// | [12, 14)  | ... plus 30 unpaid                            |
    /// | [14, 24)  | ... plus 10 paid                              |
    pub fn standard() -> Self {
        let sequence = [
            BreakDefinition::new(1, PAID_REST, BreakType::Paid),
            BreakDefinition::new(2, UNPAID_MEAL, BreakType::Unpaid),
            BreakDefinition::new(3, PAID_REST, BreakType::Paid),
            BreakDefinition::new(4, PAID_REST, BreakType::Paid),
            BreakDefinition::new(5, UNPAID_MEAL, BreakType::Unpaid),
            BreakDefinition::new(6, PAID_REST, BreakType::Paid),
        ];
        let bounds: [(i64, i64); 6] = [(2, 4), (4, 6), (6, 10), (10, 12), (12, 14), (14, 24)];

        let bands = bounds
            .iter()
            .enumerate()
            .map(|(count, &(min, max))| DurationBand {
                min_hours: Decimal::from(min),
                max_hours: Decimal::from(max),
                breaks: sequence[..=count].to_vec(),
            })
            .collect();

        Self { bands }
    }

    /// Returns the bands in ascending order.
    pub fn bands(&self) -> &[DurationBand] {
        &self.bands
    }

    /// Shortest shift length that earns any break.
    pub fn min_hours(&self) -> Decimal {
        self.bands
            .first()
            .map_or(Decimal::ZERO, |band| band.min_hours)
    }

    /// Exclusive upper limit of the schedule.
    pub fn max_hours(&self) -> Decimal {
        self.bands
            .last()
            .map_or(Decimal::ZERO, |band| band.max_hours)
    }

    /// Looks up the breaks owed for a shift of `shift_hours`.
    ///
    /// Bands are half-open: a shift of exactly a band's upper bound belongs
    /// to the next band. Shifts shorter than the first band earn no breaks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if `shift_hours` is negative, at or
    /// beyond [`max_hours`](Self::max_hours), or falls in no band.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeclock_engine::calculation::BreakEntitlementTable;
    /// use timeclock_engine::models::BreakType;
    /// use rust_decimal::Decimal;
    ///
    /// let table = BreakEntitlementTable::standard();
    ///
    /// assert!(table.entitlement_for(Decimal::new(15, 1)).unwrap().is_empty());
    ///
    /// let breaks = table.entitlement_for(Decimal::from(3)).unwrap();
    /// assert_eq!(breaks.len(), 1);
    /// assert_eq!(breaks[0].break_type, BreakType::Paid);
    ///
    /// assert!(table.entitlement_for(Decimal::from(25)).is_err());
    /// ```
    pub fn entitlement_for(&self, shift_hours: Decimal) -> EngineResult<&[BreakDefinition]> {
        if shift_hours < Decimal::ZERO || shift_hours >= self.max_hours() {
            return Err(EngineError::OutOfRange { shift_hours });
        }

        if shift_hours < self.min_hours() {
            debug!(shift_hours = %shift_hours, "Shift shorter than first band, no breaks owed");
            return Ok(&[]);
        }

        let band = self
            .bands
            .iter()
            .find(|band| band.contains(shift_hours))
            .ok_or(EngineError::OutOfRange { shift_hours })?;

        debug!(
            shift_hours = %shift_hours,
            min_hours = %band.min_hours,
            max_hours = %band.max_hours,
            breaks = band.breaks.len(),
            "Selected break band"
        );

        Ok(&band.breaks)
    }
}

impl Default for BreakEntitlementTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_breaks(position: usize, breaks: &[BreakDefinition]) -> EngineResult<()> {
    for (index, definition) in breaks.iter().enumerate() {
        if definition.duration == 0 {
            return Err(invalid(format!(
                "band {} break {} has zero duration",
                position, definition.id
            )));
        }
        if breaks[..index].iter().any(|b| b.id == definition.id) {
            return Err(invalid(format!(
                "band {} repeats break id {}",
                position, definition.id
            )));
        }
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidBreakSchedule {
        message: message.into(),
    }
}
