//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the growth-reference queries: configuration
//! validation, the one-time catalog load, and the query entry points that
//! coordinate lookup, scoring, curve sampling, and axis planning.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The process-wide reference catalog.
pub mod catalog;

/// Validation utilities.
pub mod validator;

/// Built-in fallback control points.
pub mod fallback;
