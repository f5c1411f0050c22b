//! Layer 3: Algorithms
//!
//! This layer implements the core lookup and layout logic: bracketing
//! interpolation over reference tables and hybrid axis-tick planning. It is
//! orchestrated by the engine layer.

// Bracketing lookup and linear interpolation.
pub mod interpolation;

// Hybrid weekly-then-monthly axis-tick planning.
pub mod axis;
