//! The LMS reference table and its construction screening.
//!
//! ## Purpose
//!
//! This module defines `ReferencePoint` (one age's L, M, S parameters) and
//! `ReferenceTable`, the immutable age-sorted sequence of points for one
//! population group. Construction screens the raw candidate rows so that
//! degenerate data is rejected here, never discovered at query time.
//!
//! ## Design notes
//!
//! * **Screen-Sort-Dedup Pattern**: candidates are screened for validity,
//!   stably sorted by age, then deduplicated keeping the first occurrence.
//!   The loader merges the weekly series ahead of the monthly series, so
//!   first-wins gives the fine-grained series priority on overlapping ages.
//! * **Accounting**: every dropped row is counted in a `TableReport` by the
//!   reason it was dropped.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `age_days` is strictly increasing; no duplicates.
//! * `m > 0` and `s > 0` for every point.
//! * A table is empty or holds at least `MIN_TABLE_POINTS` points.
//!
//! ## Non-goals
//!
//! * This module does not interpolate between points.
//! * This module does not acquire or resample the source spreadsheets.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GrowthError;
use crate::primitives::record::RawRecord;
use crate::primitives::units::MIN_TABLE_POINTS;

// ============================================================================
// Reference Point
// ============================================================================

/// LMS parameters of the reference distribution at one age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint<T> {
    /// Age in whole days.
    pub age_days: i64,

    /// Skewness (Box-Cox power) parameter.
    pub l: T,

    /// Median of the reference distribution.
    pub m: T,

    /// Coefficient of variation.
    pub s: T,
}

// ============================================================================
// Construction Accounting
// ============================================================================

/// Row accounting from one table construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableReport {
    /// Points that made it into the table.
    pub accepted: usize,

    /// Rows dropped as malformed (non-finite fields, non-positive M or S,
    /// negative age).
    pub rejected: usize,

    /// Rows dropped as duplicate ages (a finer-series row won).
    pub deduplicated: usize,

    /// Rows dropped for lying beyond the age horizon.
    pub clipped: usize,
}

// ============================================================================
// Reference Table
// ============================================================================

/// Immutable, age-sorted LMS reference table for one population group.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable<T> {
    /// Points in strictly increasing age order.
    points: Vec<ReferencePoint<T>>,

    /// Accounting from construction.
    report: TableReport,
}

impl<T: Float> ReferenceTable<T> {
    /// Create an empty table, the "no reference data" value.
    #[inline]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            report: TableReport::default(),
        }
    }

    /// Build a table from raw candidate rows.
    ///
    /// Screening order:
    ///
    /// 1. Drop rows with a non-finite age, L, M, or S, a non-positive M or S,
    ///    or a negative age; round surviving ages to whole days.
    /// 2. Drop rows beyond `max_age_days`.
    /// 3. Stable-sort by age and deduplicate, keeping the first occurrence
    ///    encountered in input order.
    ///
    /// Fails with [`GrowthError::TooFewPoints`] if fewer than
    /// [`MIN_TABLE_POINTS`] rows remain.
    pub fn from_records(
        records: &[RawRecord<T>],
        max_age_days: i64,
    ) -> Result<Self, GrowthError> {
        let mut report = TableReport::default();
        let mut points: Vec<ReferencePoint<T>> = Vec::with_capacity(records.len());

        for record in records {
            let finite = record.age_days.is_finite()
                && record.l.is_finite()
                && record.m.is_finite()
                && record.s.is_finite();
            if !finite || record.m <= T::zero() || record.s <= T::zero() {
                report.rejected += 1;
                continue;
            }

            // Ages are modeled as whole days.
            let age_days = match record.age_days.round().to_i64() {
                Some(age) if age >= 0 => age,
                _ => {
                    report.rejected += 1;
                    continue;
                }
            };

            if age_days > max_age_days {
                report.clipped += 1;
                continue;
            }

            points.push(ReferencePoint {
                age_days,
                l: record.l,
                m: record.m,
                s: record.s,
            });
        }

        // Stable sort preserves input order among equal ages, so dedup's
        // keep-first rule resolves overlaps in favor of the earlier series.
        points.sort_by_key(|p| p.age_days);
        let before = points.len();
        points.dedup_by_key(|p| p.age_days);
        report.deduplicated = before - points.len();
        report.accepted = points.len();

        if points.len() < MIN_TABLE_POINTS {
            return Err(GrowthError::TooFewPoints {
                got: points.len(),
                min: MIN_TABLE_POINTS,
            });
        }

        Ok(Self { points, report })
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Points in strictly increasing age order.
    #[inline]
    pub fn points(&self) -> &[ReferencePoint<T>] {
        &self.points
    }

    /// Number of points in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table holds no reference data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Youngest age covered, if any.
    #[inline]
    pub fn min_age_days(&self) -> Option<i64> {
        self.points.first().map(|p| p.age_days)
    }

    /// Oldest age covered, if any.
    #[inline]
    pub fn max_age_days(&self) -> Option<i64> {
        self.points.last().map(|p| p.age_days)
    }

    /// Row accounting from construction.
    #[inline]
    pub fn report(&self) -> TableReport {
        self.report
    }
}
