//! Error types for growth-reference operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! the catalog or loading reference data. Expected runtime absences (no
//! reference point for an age, catalog not loaded) are *not* errors; they are
//! `Option::None` at the query sites.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., points kept vs. required).
//! * **No-std**: Implements `Display` via `core::fmt`; `std::error::Error` is
//!   gated on the `std` feature.
//!
//! ## Key concepts
//!
//! 1. **Load failure**: a population group's table ended up unusable.
//! 2. **Configuration**: invalid horizon, crossover, or unit ratio.
//! 3. **Builder misuse**: a parameter set more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Nothing here is fatal to the caller; every error leaves the catalog in a
//!   well-defined, queryable-as-absent state.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::record::Sex;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for growth-reference operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrowthError {
    /// Too few usable reference points remained after screening.
    TooFewPoints {
        /// Points that survived screening.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// A population group's reference table could not be built during load.
    UnusableTable {
        /// The population group whose table failed.
        sex: Sex,
        /// Points that survived screening.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Maximum age horizon must be a positive number of days.
    InvalidHorizon(i64),

    /// Axis crossover must be a non-negative number of weeks.
    InvalidCrossover(i64),

    /// Days-per-month ratio must be finite and positive.
    InvalidUnitRatio(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for GrowthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few reference points: got {got}, need at least {min}")
            }
            Self::UnusableTable { sex, got, min } => {
                write!(
                    f,
                    "Reference table for {} is unusable: got {got} points, need at least {min}",
                    sex.name()
                )
            }
            Self::InvalidHorizon(days) => {
                write!(f, "Invalid age horizon: {days} (must be > 0 days)")
            }
            Self::InvalidCrossover(weeks) => {
                write!(f, "Invalid crossover: {weeks} (must be >= 0 weeks)")
            }
            Self::InvalidUnitRatio(ratio) => {
                write!(
                    f,
                    "Invalid days-per-month ratio: {ratio} (must be finite and > 0)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for GrowthError {}
