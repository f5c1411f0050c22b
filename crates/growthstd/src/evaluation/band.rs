//! Normal-range classification of standardized scores.
//!
//! ## Purpose
//!
//! This module classifies a Z-score against the normal range of the growth
//! standard, the basis of the "within / outside reference range" status a
//! caller shows next to a measurement.
//!
//! ## Key concepts
//!
//! * **Normal range**: Z in [-2, +2], boundaries inclusive.
//!
//! ## Non-goals
//!
//! * This module does not compute scores; it only classifies them.
//! * This module does not encode clinical severity grades beyond the
//!   three-way split.

// External dependencies
use num_traits::Float;

// ============================================================================
// Normal Range
// ============================================================================

/// Half-width of the normal range, in standard deviations.
pub const NORMAL_Z_LIMIT: f64 = 2.0;

// ============================================================================
// Score Band
// ============================================================================

/// Position of a Z-score relative to the normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Z below -2: under the reference range.
    BelowNormal,

    /// Z within [-2, +2].
    Normal,

    /// Z above +2: over the reference range.
    AboveNormal,
}

impl ScoreBand {
    /// Classify a Z-score. Boundaries are inclusive on the normal side.
    pub fn classify<T: Float>(z: T) -> Self {
        let limit = T::from(NORMAL_Z_LIMIT).unwrap();
        if z < -limit {
            Self::BelowNormal
        } else if z > limit {
            Self::AboveNormal
        } else {
            Self::Normal
        }
    }

    /// Whether the score lies within the normal range.
    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
