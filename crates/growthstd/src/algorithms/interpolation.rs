//! Bracketing lookup and linear interpolation over a reference table.
//!
//! ## Purpose
//!
//! This module answers "what is the reference point at age X" for an
//! age-sorted LMS table: clamp outside the covered range, binary-search the
//! enclosing bracket inside it, and linearly blend L, M, and S independently.
//!
//! ## Design notes
//!
//! * **Clamping, not extrapolation**: ages outside the table return the
//!   boundary point unchanged.
//! * **O(log n)**: the bracket is found by binary search; tables are queried
//!   many times per chart render and must not be rescanned linearly.
//! * **Whole days**: queried ages are rounded to the nearest whole day and
//!   floored at 0 before lookup.
//!
//! ## Invariants
//!
//! * Interpolated L, M, S lie between the bracket endpoints' values.
//! * A non-empty table always yields a point; an empty table never does.
//!
//! ## Non-goals
//!
//! * This module does not validate table invariants (construction does).
//! * This module does not compute scores from the interpolated parameters.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::table::{ReferencePoint, ReferenceTable};

// ============================================================================
// Lookup
// ============================================================================

/// Reference point at an age given in (possibly fractional) days.
///
/// The age is rounded to the nearest whole day and floored at 0. Returns
/// `None` for a non-finite age or an empty table.
pub fn lookup<T: Float>(table: &ReferenceTable<T>, age_days: T) -> Option<ReferencePoint<T>> {
    if !age_days.is_finite() {
        return None;
    }
    lookup_days(table, age_days.round().to_i64()?)
}

/// Reference point at an age in whole days.
///
/// Returns `None` iff the table is empty.
pub fn lookup_days<T: Float>(table: &ReferenceTable<T>, age_days: i64) -> Option<ReferencePoint<T>> {
    let points = table.points();
    let first = points.first()?;
    let last = points.last()?;

    let age = age_days.max(0);

    // Clamp outside the covered range: boundary points are returned unchanged.
    if age <= first.age_days {
        return Some(*first);
    }
    if age >= last.age_days {
        return Some(*last);
    }

    // Bracket (a, b) with a.age_days <= age < b.age_days.
    let hi = points.partition_point(|p| p.age_days <= age);
    let a = points[hi - 1];
    let b = points[hi];

    let t = T::from(age - a.age_days).unwrap() / T::from(b.age_days - a.age_days).unwrap();

    Some(ReferencePoint {
        age_days: age,
        l: a.l + t * (b.l - a.l),
        m: a.m + t * (b.m - a.m),
        s: a.s + t * (b.s - a.s),
    })
}
