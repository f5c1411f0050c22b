//! High-level API for the growth-reference catalog.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for the catalog's configured constants (age horizon, axis
//! crossover, unit ratio), plus the public re-exports of the query surface.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults for all parameters.
//! * **Validated**: parameters are checked when `.build()` is called.
//! * **Configuration, not behavior**: the horizon and crossover are settings
//!   of the catalog, never constants baked into the algorithms.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CatalogBuilder`] via `Catalog::new()` (prelude name).
//! 2. Chain configuration methods (`.max_age_days()`, `.crossover_weeks()`).
//! 3. Call `.build()` to obtain a not-ready [`ReferenceCatalog`], then
//!    `.load()` it with the loader's record sequences.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::axis::{plan_ticks, AxisConfig, AxisTick, TickWeight};
pub use crate::algorithms::interpolation::{lookup, lookup_days};
pub use crate::engine::catalog::{CatalogConfig, LoadSummary, ReferenceCatalog};
pub use crate::engine::fallback::control_points as fallback_points;
pub use crate::evaluation::band::{ScoreBand, NORMAL_Z_LIMIT};
pub use crate::evaluation::curves::{sample_curve, CurvePoint, STANDARD_CURVES};
pub use crate::math::lms::{value_at, z_score};
pub use crate::primitives::errors::GrowthError;
pub use crate::primitives::record::{Measurement, RawRecord, Sex};
pub use crate::primitives::table::{ReferencePoint, ReferenceTable, TableReport};
pub use crate::primitives::units::{
    DAYS_PER_MONTH, DAYS_PER_WEEK, DEFAULT_CROSSOVER_WEEKS, DEFAULT_MAX_AGE_DAYS,
    MIN_TABLE_POINTS,
};

// ============================================================================
// Catalog Builder
// ============================================================================

/// Fluent builder for a reference catalog's configured constants.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    /// Maximum age horizon, in days.
    pub max_age_days: Option<i64>,

    /// Fine/coarse axis crossover, in weeks.
    pub crossover_weeks: Option<i64>,

    /// Fine-to-coarse unit ratio, in days per month.
    pub days_per_month: Option<f64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl CatalogBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum age horizon, in days (default: 1826, five years).
    pub fn max_age_days(mut self, days: i64) -> Self {
        if self.max_age_days.is_some() {
            self.duplicate_param = Some("max_age_days");
        }
        self.max_age_days = Some(days);
        self
    }

    /// Set the axis crossover, in weeks (default: 13).
    pub fn crossover_weeks(mut self, weeks: i64) -> Self {
        if self.crossover_weeks.is_some() {
            self.duplicate_param = Some("crossover_weeks");
        }
        self.crossover_weeks = Some(weeks);
        self
    }

    /// Set the days-per-month ratio (default: 30.4375).
    pub fn days_per_month(mut self, ratio: f64) -> Self {
        if self.days_per_month.is_some() {
            self.duplicate_param = Some("days_per_month");
        }
        self.days_per_month = Some(ratio);
        self
    }

    /// Validate the configuration and construct a not-ready catalog.
    pub fn build<T: Float>(self) -> Result<ReferenceCatalog<T>, GrowthError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let max_age_days = self.max_age_days.unwrap_or(DEFAULT_MAX_AGE_DAYS);
        Validator::validate_horizon(max_age_days)?;

        let crossover_weeks = self.crossover_weeks.unwrap_or(DEFAULT_CROSSOVER_WEEKS);
        Validator::validate_crossover(crossover_weeks)?;

        let days_per_month = self.days_per_month.unwrap_or(DAYS_PER_MONTH);
        Validator::validate_unit_ratio(days_per_month)?;

        Ok(ReferenceCatalog::with_config(CatalogConfig {
            max_age_days,
            axis: AxisConfig {
                crossover_weeks,
                days_per_month,
            },
        }))
    }
}
