//! Error types for epidemic curve analysis.
//!
//! ## Purpose
//!
//! This module defines the hard failures that can occur while configuring an
//! analysis or handing a daily series to it. Expected data sparsity (an
//! outbreak that has not started, no deaths yet, a fit that does not settle)
//! is never an error: those conditions have fallbacks and are reported as
//! warnings on the resulting model.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (index, got vs. min).
//! * **Deferred**: Duplicate builder parameters are recorded and surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Series validation**: Empty input, unsorted dates, inconsistent totals.
//! 2. **Parameter validation**: Window, growth days, lag, lookback, dilation, shape.
//! 3. **Region identity**: Unknown region codes and invalid populations.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not model soft fit failures (see `FitWarning`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for epidemic curve analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum EpicurveError {
    /// The daily series contains no records.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The series is too short to produce a single fully smoothed day.
    TooFewDays {
        /// Number of days provided.
        got: usize,
        /// Minimum number of days (the coerced smoothing window).
        min: usize,
    },

    /// Dates must be strictly ascending and unique.
    UnsortedDates {
        /// Index of the first record whose date is not after its predecessor.
        index: usize,
    },

    /// Cumulative totals do not match the running sum of raw counts.
    InconsistentTotals {
        /// Index of the first record whose totals disagree.
        index: usize,
    },

    /// Smoothing window must be between 1 and 61 days.
    InvalidSmoothingWindow(usize),

    /// Expected growth days must be between 1 and 365.
    InvalidGrowthDays(usize),

    /// Expected lag days must be at most 60.
    InvalidLagDays(usize),

    /// Infection-rate lookback must be between 1 and 60 days.
    InvalidSpreadDays(usize),

    /// Dilation must be finite and in (0, 10].
    InvalidDilation(f64),

    /// Dilation clip must be finite and at least 1.
    InvalidDilationClip(f64),

    /// Initial shape factor must be in [4, 8].
    InvalidShape(f64),

    /// Region population must be positive.
    InvalidPopulation(u64),

    /// No records exist for the requested region code.
    UnknownRegion(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EpicurveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Daily series is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::TooFewDays { got, min } => {
                write!(f, "Too few days: got {got}, need at least {min}")
            }
            Self::UnsortedDates { index } => {
                write!(
                    f,
                    "Dates must be strictly ascending: record {index} is not after record {}",
                    index.saturating_sub(1)
                )
            }
            Self::InconsistentTotals { index } => {
                write!(f, "Cumulative totals disagree with raw counts at record {index}")
            }
            Self::InvalidSmoothingWindow(w) => {
                write!(f, "Invalid smoothing window: {w} (must be in [1, 61])")
            }
            Self::InvalidGrowthDays(d) => {
                write!(f, "Invalid growth days: {d} (must be in [1, 365])")
            }
            Self::InvalidLagDays(d) => write!(f, "Invalid lag days: {d} (must be <= 60)"),
            Self::InvalidSpreadDays(d) => {
                write!(f, "Invalid spread days: {d} (must be in [1, 60])")
            }
            Self::InvalidDilation(d) => {
                write!(f, "Invalid dilation: {d} (must be > 0 and <= 10)")
            }
            Self::InvalidDilationClip(c) => {
                write!(f, "Invalid dilation clip: {c} (must be >= 1 and finite)")
            }
            Self::InvalidShape(r) => write!(f, "Invalid shape factor: {r} (must be in [4, 8])"),
            Self::InvalidPopulation(p) => write!(f, "Invalid population: {p} (must be > 0)"),
            Self::UnknownRegion(code) => write!(f, "Region not recognised: '{code}'"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for EpicurveError {}
