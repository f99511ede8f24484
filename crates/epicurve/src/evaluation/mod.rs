//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives reader-facing quantities from the fitted curves:
//! - Forward projections of new and cumulative counts
//! - Fit consistency, per-million and per-area rates, and the outcome
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
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

/// Forward projection from the fitted curves.
pub mod prediction;

/// Consistency, rates and outcome.
pub mod diagnostics;
