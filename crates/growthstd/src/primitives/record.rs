//! Input records and population-group identifiers.
//!
//! ## Purpose
//!
//! This module defines the strict record shape the external normalization
//! pipeline hands over (`RawRecord`), the measurement shape callers supply
//! (`Measurement`), and the population-group identifier (`Sex`). The
//! spreadsheet-era dynamic row shape (fields reachable under several names
//! and casings) stops at this boundary: a record either fits this type or is
//! screened out, with a count reported.
//!
//! ## Design notes
//!
//! * **Consumed, not owned**: measurements are read by the core, never stored.
//! * **Unit constructors**: the pipeline's native units (weeks, months) are
//!   converted to days here, through the same constants the axis planner uses.
//! * **Open enumeration**: `Sex` is two-valued in this domain but declared
//!   `#[non_exhaustive]`.
//!
//! ## Non-goals
//!
//! * This module does not validate or screen records; see table construction.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::units::{DAYS_PER_MONTH, DAYS_PER_WEEK};

// ============================================================================
// Population Group
// ============================================================================

/// Population group of a reference table.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Girls' reference standard.
    Girl,

    /// Boys' reference standard.
    Boy,
}

impl Sex {
    /// Get the lowercase name of the group.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Girl => "girls",
            Self::Boy => "boys",
        }
    }
}

// ============================================================================
// Raw Input Record
// ============================================================================

/// One candidate reference row from the external normalization pipeline.
///
/// Ages are carried as floating-point days until screening, where they are
/// rounded to whole days; this lets the pipeline hand over resampled series
/// (weeks, fractional months) without pre-rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord<T> {
    /// Age in days (possibly fractional until screening).
    pub age_days: T,

    /// Skewness (Box-Cox power) parameter.
    pub l: T,

    /// Median of the reference distribution.
    pub m: T,

    /// Coefficient of variation.
    pub s: T,
}

impl<T: Float> RawRecord<T> {
    /// Create a record with the age already expressed in days.
    #[inline]
    pub fn days(age_days: T, l: T, m: T, s: T) -> Self {
        Self { age_days, l, m, s }
    }

    /// Create a record from a week index of the fine-grained series.
    #[inline]
    pub fn weeks(weeks: T, l: T, m: T, s: T) -> Self {
        Self {
            age_days: weeks * T::from(DAYS_PER_WEEK).unwrap(),
            l,
            m,
            s,
        }
    }

    /// Create a record from a month index of the coarse series.
    #[inline]
    pub fn months(months: T, l: T, m: T, s: T) -> Self {
        Self {
            age_days: months * T::from(DAYS_PER_MONTH).unwrap(),
            l,
            m,
            s,
        }
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// One weight measurement of a child, consumed by the scoring queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement<T> {
    /// Age at measurement, in whole days.
    pub age_days: i64,

    /// Measured weight, in the reference table's unit (kilograms for the
    /// WHO weight-for-age standard).
    pub weight: T,
}

impl<T: Float> Measurement<T> {
    /// Create a measurement.
    #[inline]
    pub fn new(age_days: i64, weight: T) -> Self {
        Self { age_days, weight }
    }
}
