//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the curve fitter:
//! - Logistic (sigmoid) and bell distribution evaluation and inversion
//! - The day-to-scaled-time transform with post-peak dilation
//! - Rescale factors with zero guards
//!
//! These are reusable mathematical building blocks with no pipeline logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
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

/// Bell and sigmoid functions.
pub mod logistic;

/// Scaled cycle time.
pub mod transform;

/// Rescale factors and rounding.
pub mod scaling;
