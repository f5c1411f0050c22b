//! # growthstd - WHO child-growth reference curves for Rust
//!
//! Weight-for-age reference data as a queryable library: the LMS reference
//! table with bracketing interpolation, the forward and inverse Z-score
//! transforms of the LMS method, and the hybrid weekly-then-monthly
//! axis-tick layout that WHO-style growth charts use, all driven by one
//! shared set of age-unit constants so the curves and the axis can never
//! disagree.
//!
//! ## What is the LMS method?
//!
//! Growth standards publish three parameters per age: L (skewness, a Box-Cox
//! power), M (median), and S (coefficient of variation). Together they
//! describe the skewed distribution of a measurement at that age, and they
//! turn a raw value into a Z-score, the number of standard deviations the
//! measurement sits from the age-matched median. The same parameters, run
//! through the inverse transform, generate the reference curves a chart
//! draws behind a child's trajectory.
//!
//! ## Quick Start
//!
//! ```rust
//! use growthstd::prelude::*;
//!
//! // Build a catalog, then load it once. Here the built-in fallback control
//! // points stand in for the full resampled WHO series a real loader
//! // hands over.
//! let mut catalog: ReferenceCatalog<f64> = Catalog::new().build()?;
//! catalog.load(&fallback_points(Girl), &fallback_points(Boy))?;
//!
//! // Score a measurement against the reference.
//! let z = catalog.score(Girl, 61.0, 5.1);
//! assert!(z.is_some());
//!
//! // Axis ticks and the median curve for a chart, on the same age grid.
//! let ticks = catalog.ticks(1826);
//! let ages: Vec<f64> = ticks.iter().map(|t| t.position).collect();
//! let median = catalog.curve(Girl, 0.0, &ages);
//! assert_eq!(median.len(), ticks.len());
//! # Result::<(), GrowthError>::Ok(())
//! ```
//!
//! ### Configured constants
//!
//! The age horizon (default five years), the weekly/monthly crossover
//! (default 13 weeks), and the days-per-month ratio (default 30.4375) are
//! builder settings, validated at `build()`:
//!
//! ```rust
//! use growthstd::prelude::*;
//!
//! let catalog: ReferenceCatalog<f64> = Catalog::new()
//!     .max_age_days(183)      // six-month chart
//!     .crossover_weeks(13)
//!     .build()?;
//! # let _ = catalog;
//! # Result::<(), GrowthError>::Ok(())
//! ```
//!
//! ### Result and absence
//!
//! Queries return `Option`: `None` means "no reference data" (the catalog
//! never loaded, the group is unknown, or the inputs were invalid) and is
//! distinct from a computed score of zero. Configuration and load failures
//! return `Result<_, GrowthError>`; nothing in this crate is fatal to the
//! caller.
//!
//! ## References
//!
//! - Cole, T. J. (1990). "The LMS method for constructing normalized growth
//!   standards"
//! - WHO Multicentre Growth Reference Study Group (2006). "WHO Child Growth
//!   Standards: Methods and development"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and shared constants.
mod primitives;

// Layer 2: Math - pure LMS transform functions.
mod math;

// Layer 3: Algorithms - interpolation and axis layout.
mod algorithms;

// Layer 4: Evaluation - score bands and curve sampling.
mod evaluation;

// Layer 5: Engine - validation and the reference catalog.
mod engine;

// High-level fluent API for the catalog.
mod api;

// Standard growthstd prelude.
pub mod prelude {
    pub use crate::api::{
        fallback_points, lookup, lookup_days, plan_ticks, sample_curve, value_at, z_score,
        AxisConfig, AxisTick, CatalogBuilder as Catalog, CatalogConfig, CurvePoint, GrowthError,
        LoadSummary, Measurement, RawRecord, ReferenceCatalog, ReferencePoint, ReferenceTable,
        ScoreBand, Sex,
        Sex::{Boy, Girl},
        TableReport, TickWeight, DAYS_PER_MONTH, DAYS_PER_WEEK, DEFAULT_CROSSOVER_WEEKS,
        DEFAULT_MAX_AGE_DAYS, MIN_TABLE_POINTS, NORMAL_Z_LIMIT, STANDARD_CURVES,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
