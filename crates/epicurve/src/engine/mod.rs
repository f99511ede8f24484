//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates an analysis by coordinating the algorithms
//! (smoothing, milestones, fitting, curves) and the evaluation layer. It owns
//! configuration, validation and the assembled result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
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

/// Configuration and the analysis pipeline.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// The assembled region model.
pub mod output;
