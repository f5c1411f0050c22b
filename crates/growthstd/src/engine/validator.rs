//! Validation for catalog configuration.
//!
//! ## Purpose
//!
//! This module provides the fail-fast checks the catalog builder runs before
//! constructing a catalog: horizon, crossover, and unit-ratio bounds, plus
//! duplicate-parameter detection.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered.
//! * **Boundary only**: reference rows are screened (filtered and counted)
//!   during table construction, not rejected here.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid configuration.
//! * This module does not screen reference rows.

// Internal dependencies
use crate::primitives::errors::GrowthError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for catalog configuration.
///
/// All methods return `Result<(), GrowthError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    /// Validate the maximum age horizon, in days.
    pub fn validate_horizon(max_age_days: i64) -> Result<(), GrowthError> {
        if max_age_days <= 0 {
            return Err(GrowthError::InvalidHorizon(max_age_days));
        }
        Ok(())
    }

    /// Validate the axis crossover, in weeks.
    ///
    /// # Notes
    ///
    /// * A horizon below the crossover is allowed (the axis then shows week
    ///   ticks only), so no cross-check against the horizon is made here.
    pub fn validate_crossover(crossover_weeks: i64) -> Result<(), GrowthError> {
        if crossover_weeks < 0 {
            return Err(GrowthError::InvalidCrossover(crossover_weeks));
        }
        Ok(())
    }

    /// Validate the fine-to-coarse unit ratio, in days per month.
    pub fn validate_unit_ratio(days_per_month: f64) -> Result<(), GrowthError> {
        if !days_per_month.is_finite() || days_per_month <= 0.0 {
            return Err(GrowthError::InvalidUnitRatio(days_per_month));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), GrowthError> {
        if let Some(parameter) = duplicate_param {
            return Err(GrowthError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
