//! Shared age-unit constants and conversions.
//!
//! ## Purpose
//!
//! This module defines the single set of age-unit constants used everywhere
//! ages are converted: reference-table clipping, input-record unit
//! constructors, and axis-tick planning. Keeping one source for these
//! constants is what guarantees the axis and the reference data can never
//! disagree about where a month falls.
//!
//! ## Key concepts
//!
//! * **Days as the raw domain**: every age is ultimately a whole-day count.
//! * **Average month**: 30.4375 days, the mean Gregorian month length
//!   (365.25 / 12), matching the WHO weight-for-age month grid.
//!
//! ## Invariants
//!
//! * Conversions round to the nearest whole day, never truncate.
//!
//! ## Non-goals
//!
//! * This module does not parse or format ages for display.

// ============================================================================
// Constants
// ============================================================================

/// Days per week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Average days per month (365.25 / 12), the fine-to-coarse unit ratio.
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Default fine/coarse axis crossover, in weeks.
pub const DEFAULT_CROSSOVER_WEEKS: i64 = 13;

/// Default maximum age horizon: 60 months, rounded to whole days.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 1826;

/// Minimum number of reference points for a usable table.
///
/// Below this, bracketing interpolation has too little support and the table
/// is treated as "no reference data".
pub const MIN_TABLE_POINTS: usize = 4;

// ============================================================================
// Conversions
// ============================================================================

/// Convert a whole-week index to days.
#[inline]
pub fn weeks_to_days(weeks: i64) -> i64 {
    weeks * DAYS_PER_WEEK
}

/// Convert a whole-month index to days, rounding to the nearest whole day.
#[inline]
pub fn months_to_days(months: i64, days_per_month: f64) -> i64 {
    (months as f64 * days_per_month).round() as i64
}
