//! Layer 3: Algorithms
//!
//! This layer implements the core logic of the analysis: centred smoothing,
//! milestone detection, the shape-factor descent, the alternating curve fit
//! and curve generation. It contains the "business logic" of epidemic curve
//! fitting but is orchestrated by the engine layer.

// Centred moving average with total-preserving rescale.
pub mod smoothing;

// Start, day zero, peaks, provisional end and infection rate.
pub mod milestones;

// Coordinate descent over the bell shape factor.
pub mod descent;

// Alternating scale/shape fit for one metric.
pub mod fitting;

// Bell and sigmoid curve generation from a fit.
pub mod curves;
