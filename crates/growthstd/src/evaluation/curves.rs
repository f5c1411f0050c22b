//! Constant-Z reference-curve sampling.
//!
//! ## Purpose
//!
//! This module samples the raw values a fixed standardized score corresponds
//! to across a set of ages: the reference curves (Z = -3 to +3) a growth
//! chart draws behind the child's trajectory. It is the inverse transform
//! applied pointwise to interpolated table parameters.
//!
//! ## Design notes
//!
//! * **Absence skipped**: ages with no reference point, or scores outside
//!   the transform's domain, produce no sample rather than a placeholder.
//! * **Caller picks the grid**: sampling ages typically come from the axis
//!   planner's tick positions, which keeps curve knots and gridlines aligned.
//!
//! ## Non-goals
//!
//! * This module does not draw anything.
//! * This module does not choose line colors or widths for the curves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::lookup;
use crate::math::lms::value_at;
use crate::primitives::table::ReferenceTable;

// ============================================================================
// Standard Curves
// ============================================================================

/// The standard deviation lines a WHO-style chart draws.
pub const STANDARD_CURVES: [f64; 7] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];

// ============================================================================
// Curve Point
// ============================================================================

/// One sample of a constant-Z reference curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint<T> {
    /// Age in days, as queried.
    pub age_days: T,

    /// Raw value the score corresponds to at that age.
    pub value: T,
}

// ============================================================================
// Sampling
// ============================================================================

/// Sample the curve of constant score `z` at the given ages.
///
/// Ages without reference data are skipped; the result holds one point per
/// age that produced a value, in input order.
pub fn sample_curve<T: Float>(table: &ReferenceTable<T>, z: T, ages: &[T]) -> Vec<CurvePoint<T>> {
    ages.iter()
        .filter_map(|&age_days| {
            let p = lookup(table, age_days)?;
            let value = value_at(p.l, p.m, p.s, z)?;
            Some(CurvePoint { age_days, value })
        })
        .collect()
}
