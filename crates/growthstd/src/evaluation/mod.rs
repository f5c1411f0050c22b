//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives display-facing results from the lower layers:
//! - Normal-range classification of a measurement's score
//! - Constant-Z reference-curve sampling for chart rendering
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normal-range classification of standardized scores.
pub mod band;

/// Constant-Z reference-curve sampling.
pub mod curves;
