//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical transforms of the LMS method.
//! These are reusable building blocks with no table or catalog logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Forward and inverse LMS score transforms.
pub mod lms;
