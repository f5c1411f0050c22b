//! The process-wide reference catalog.
//!
//! ## Purpose
//!
//! This module holds one reference table per population group behind a
//! single query entry point. The catalog is constructed not-ready, populated
//! exactly once by an explicit `load` step, and read-only afterward; every
//! query degrades to "absent" when no data is available.
//!
//! ## Design notes
//!
//! * **Explicit ownership**: the catalog is a value constructed and passed
//!   by the caller, not module-level state mutated implicitly.
//! * **All-or-nothing load**: both groups' tables are built before either is
//!   stored, so a failed load leaves the catalog exactly as it was.
//! * **Idempotent load**: a second call after success is a no-op returning
//!   the stored summary.
//! * **Shared constants**: axis ticks come from the catalog's own configured
//!   ratio, so the axis and the tables cannot disagree on unit boundaries.
//!
//! ## Invariants
//!
//! * Post-load the catalog is never mutated; queries are pure and safe to
//!   call from any thread once load's completion is observed.
//! * An unloaded (or failed-load) catalog answers every query with `None`.
//!
//! ## Non-goals
//!
//! * This module does not acquire reference data (the external loader does).
//! * This module does not retry or time out; `load` is all-or-nothing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::axis::{plan_ticks, AxisConfig, AxisTick};
use crate::algorithms::interpolation::lookup;
use crate::evaluation::band::ScoreBand;
use crate::evaluation::curves::{sample_curve, CurvePoint};
use crate::math::lms::z_score;
use crate::primitives::errors::GrowthError;
use crate::primitives::record::{Measurement, RawRecord, Sex};
use crate::primitives::table::{ReferencePoint, ReferenceTable, TableReport};
use crate::primitives::units::DEFAULT_MAX_AGE_DAYS;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration of a reference catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogConfig {
    /// Maximum age horizon, in days; tables are clipped here.
    pub max_age_days: i64,

    /// Hybrid axis configuration.
    pub axis: AxisConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            axis: AxisConfig::default(),
        }
    }
}

// ============================================================================
// Load Summary
// ============================================================================

/// Per-group row accounting from a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Accounting for the girls' table.
    pub girls: TableReport,

    /// Accounting for the boys' table.
    pub boys: TableReport,
}

// ============================================================================
// Reference Catalog
// ============================================================================

/// Holder of one reference table per population group.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog<T> {
    /// Configuration fixed at construction.
    config: CatalogConfig,

    /// Girls' table; empty until a successful load.
    girls: ReferenceTable<T>,

    /// Boys' table; empty until a successful load.
    boys: ReferenceTable<T>,

    /// Present iff a load succeeded.
    summary: Option<LoadSummary>,
}

impl<T: Float> Default for ReferenceCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ReferenceCatalog<T> {
    /// Create a not-ready catalog with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create a not-ready catalog with the given configuration.
    pub(crate) fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            girls: ReferenceTable::empty(),
            boys: ReferenceTable::empty(),
            summary: None,
        }
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Populate both tables from the loader's record sequences.
    ///
    /// Fails with [`GrowthError::UnusableTable`] if either group screens down
    /// to fewer than the minimum points; the catalog is then left untouched
    /// (a later retry may succeed). After a success, further calls are no-ops
    /// returning the stored summary.
    pub fn load(
        &mut self,
        girls: &[RawRecord<T>],
        boys: &[RawRecord<T>],
    ) -> Result<LoadSummary, GrowthError> {
        if let Some(summary) = self.summary {
            return Ok(summary);
        }

        // Build both before storing either.
        let girls_table = Self::build_table(girls, self.config.max_age_days, Sex::Girl)?;
        let boys_table = Self::build_table(boys, self.config.max_age_days, Sex::Boy)?;

        let summary = LoadSummary {
            girls: girls_table.report(),
            boys: boys_table.report(),
        };
        self.girls = girls_table;
        self.boys = boys_table;
        self.summary = Some(summary);

        Ok(summary)
    }

    fn build_table(
        records: &[RawRecord<T>],
        max_age_days: i64,
        sex: Sex,
    ) -> Result<ReferenceTable<T>, GrowthError> {
        ReferenceTable::from_records(records, max_age_days).map_err(|e| match e {
            GrowthError::TooFewPoints { got, min } => GrowthError::UnusableTable { sex, got, min },
            other => other,
        })
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Whether a load has succeeded.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.summary.is_some()
    }

    /// Row accounting from the successful load, if any.
    #[inline]
    pub fn summary(&self) -> Option<LoadSummary> {
        self.summary
    }

    /// The catalog's configuration.
    #[inline]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Read-only view of one group's table (empty when not ready).
    #[inline]
    pub fn table(&self, sex: Sex) -> &ReferenceTable<T> {
        match sex {
            Sex::Girl => &self.girls,
            Sex::Boy => &self.boys,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Reference point at an age, interpolated from the group's table.
    pub fn query(&self, sex: Sex, age_days: T) -> Option<ReferencePoint<T>> {
        lookup(self.table(sex), age_days)
    }

    /// Standardized score of a raw value at an age.
    pub fn score(&self, sex: Sex, age_days: T, value: T) -> Option<T> {
        let p = self.query(sex, age_days)?;
        z_score(p.l, p.m, p.s, value)
    }

    /// Standardized score of a measurement.
    pub fn score_measurement(&self, sex: Sex, measurement: &Measurement<T>) -> Option<T> {
        self.score(sex, T::from(measurement.age_days)?, measurement.weight)
    }

    /// Normal-range classification of a raw value at an age.
    pub fn band(&self, sex: Sex, age_days: T, value: T) -> Option<ScoreBand> {
        self.score(sex, age_days, value).map(ScoreBand::classify)
    }

    /// Sample the constant-Z reference curve at the given ages.
    pub fn curve(&self, sex: Sex, z: T, ages: &[T]) -> Vec<CurvePoint<T>> {
        sample_curve(self.table(sex), z, ages)
    }

    /// Lay out the hybrid axis ticks up to `max_age_days`, using the
    /// catalog's configured crossover and unit ratio.
    pub fn ticks(&self, max_age_days: i64) -> Vec<AxisTick<T>> {
        plan_ticks(&self.config.axis, max_age_days)
    }
}
