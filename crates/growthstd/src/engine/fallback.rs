//! Built-in fallback control points.
//!
//! ## Purpose
//!
//! This module ships a handful of known-good WHO weight-for-age control
//! points per population group. A caller whose acquisition pipeline failed
//! can load the catalog from these and keep the rest of the system working
//! with degraded accuracy instead of no reference at all. The core treats a
//! fallback table and a full table uniformly.
//!
//! ## Key concepts
//!
//! * **Control points**: birth, one month, thirteen weeks, and five years,
//!   the corners of the standard's age range plus the weekly/monthly seam.
//!
//! ## Non-goals
//!
//! * This module does not decide when to fall back; that policy belongs to
//!   the external loader.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::record::{RawRecord, Sex};

// ============================================================================
// Control Point Data
// ============================================================================

/// WHO weight-for-age control points for girls: (age_days, L, M, S).
const GIRLS: [(f64, f64, f64, f64); 4] = [
    (0.0, 0.3809, 3.2322, 0.14171),
    (30.0, 0.1714, 4.1873, 0.13724),
    (91.0, 0.0402, 5.8458, 0.12619),
    (1826.0, -0.3518, 18.2193, 0.14821),
];

/// WHO weight-for-age control points for boys: (age_days, L, M, S).
const BOYS: [(f64, f64, f64, f64); 4] = [
    (0.0, 0.3487, 3.3464, 0.14602),
    (30.0, 0.2297, 4.4709, 0.13395),
    (91.0, 0.1738, 6.3762, 0.11727),
    (1826.0, -0.1506, 18.3366, 0.13517),
];

// ============================================================================
// Access
// ============================================================================

/// Fallback control points for one population group, as loader records.
pub fn control_points<T: Float>(sex: Sex) -> Vec<RawRecord<T>> {
    let rows: &[(f64, f64, f64, f64)] = match sex {
        Sex::Girl => &GIRLS,
        Sex::Boy => &BOYS,
    };

    rows.iter()
        .map(|&(age_days, l, m, s)| {
            RawRecord::days(
                T::from(age_days).unwrap(),
                T::from(l).unwrap(),
                T::from(m).unwrap(),
                T::from(s).unwrap(),
            )
        })
        .collect()
}
