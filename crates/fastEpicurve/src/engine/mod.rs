//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for multi-region
//! analysis. It distributes independent regions across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
