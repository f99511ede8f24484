//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures and small utilities used
//! throughout the crate: daily records, region identity, day numbering,
//! smoothing windows and error types. It has zero internal dependencies
//! within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Daily records and region identity.
pub mod record;

/// Centred windowing logic.
pub mod window;

/// Relative day numbering.
pub mod timeline;

/// Default vs. observed parameter values.
pub mod calibrated;

/// Shared error types.
pub mod errors;
