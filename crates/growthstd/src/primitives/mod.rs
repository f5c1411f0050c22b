//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and shared constants
//! used throughout the crate. It has zero dependencies on higher layers.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared age-unit constants and conversions.
pub mod units;

/// Shared error types.
pub mod errors;

/// Input records and population-group identifiers.
pub mod record;

/// The LMS reference table and its construction screening.
pub mod table;
