//! Input validation for analysis configuration and daily series.
//!
//! ## Purpose
//!
//! This module provides validation functions for the analysis parameters and
//! for the daily series handed to an analysis. It checks parameter bounds,
//! date ordering, and the agreement between raw counts and cumulative totals.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types where relevant.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Window 1–61, growth 1–365, lag ≤ 60, spread 1–60,
//!   dilation in (0, 10], clip ≥ 1, initial shape in [4, 8].
//! * **Series Shape**: Non-empty, long enough for one smoothed day, strictly
//!   ascending dates, cumulative totals equal to running sums of raw counts.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, deduplicate or repair input data.
//! * This module does not judge whether the data is epidemiologically useful;
//!   sparse data is handled by fallbacks, not errors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::descent::{MAX_SHAPE, MIN_SHAPE};
use crate::primitives::errors::EpicurveError;
use crate::primitives::record::{DailyRecord, Region};
use crate::primitives::window::Window;

// ============================================================================
// Bounds
// ============================================================================

/// Largest accepted smoothing window.
pub const MAX_SMOOTHING_WINDOW: usize = 61;

/// Largest accepted expected growth interval.
pub const MAX_GROWTH_DAYS: usize = 365;

/// Largest accepted expected lag.
pub const MAX_LAG_DAYS: usize = 60;

/// Largest accepted infection-rate lookback.
pub const MAX_SPREAD_DAYS: usize = 60;

/// Largest accepted dilation factor.
pub const MAX_DILATION: f64 = 10.0;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for analysis configuration and input data.
///
/// Provides static methods that return `Result<(), EpicurveError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Series Validation
    // ========================================================================

    /// Validate a daily series for an analysis with the given window.
    pub fn validate_series<T>(records: &[DailyRecord<T>], window: usize) -> Result<(), EpicurveError> {
        // Check 1: Non-empty series
        if records.is_empty() {
            return Err(EpicurveError::EmptyInput);
        }

        // Check 2: At least one full window
        let min = Window::coerce_width(window);
        if records.len() < min {
            return Err(EpicurveError::TooFewDays {
                got: records.len(),
                min,
            });
        }

        // Check 3: Ordering and totals (combined loop)
        for (index, pair) in records.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.date <= previous.date {
                return Err(EpicurveError::UnsortedDates { index: index + 1 });
            }
            if current.cases_to_date != previous.cases_to_date + current.raw_cases
                || current.deaths_to_date != previous.deaths_to_date + current.raw_deaths
            {
                return Err(EpicurveError::InconsistentTotals { index: index + 1 });
            }
        }

        Ok(())
    }

    /// Validate region identity.
    pub fn validate_region(region: &Region) -> Result<(), EpicurveError> {
        if region.population == 0 {
            return Err(EpicurveError::InvalidPopulation(region.population));
        }
        if let Some(density) = region.density {
            if !density.is_finite() || density <= 0.0 {
                return Err(EpicurveError::InvalidInput(format!(
                    "density={density} (must be positive and finite)"
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing window.
    pub fn validate_smoothing_window(window: usize) -> Result<(), EpicurveError> {
        if window == 0 || window > MAX_SMOOTHING_WINDOW {
            return Err(EpicurveError::InvalidSmoothingWindow(window));
        }
        Ok(())
    }

    /// Validate the expected start-to-peak interval.
    pub fn validate_growth_days(days: usize) -> Result<(), EpicurveError> {
        if days == 0 || days > MAX_GROWTH_DAYS {
            return Err(EpicurveError::InvalidGrowthDays(days));
        }
        Ok(())
    }

    /// Validate the expected cases-to-deaths lag.
    pub fn validate_lag_days(days: usize) -> Result<(), EpicurveError> {
        if days > MAX_LAG_DAYS {
            return Err(EpicurveError::InvalidLagDays(days));
        }
        Ok(())
    }

    /// Validate the infection-rate lookback.
    pub fn validate_spread_days(days: usize) -> Result<(), EpicurveError> {
        if days == 0 || days > MAX_SPREAD_DAYS {
            return Err(EpicurveError::InvalidSpreadDays(days));
        }
        Ok(())
    }

    /// Validate a dilation factor.
    pub fn validate_dilation<T: Float>(dilation: T) -> Result<(), EpicurveError> {
        let value = dilation.to_f64().unwrap_or(f64::NAN);
        if !value.is_finite() || value <= 0.0 || value > MAX_DILATION {
            return Err(EpicurveError::InvalidDilation(value));
        }
        Ok(())
    }

    /// Validate the dilation clip.
    pub fn validate_dilation_clip<T: Float>(clip: T) -> Result<(), EpicurveError> {
        let value = clip.to_f64().unwrap_or(f64::NAN);
        if !value.is_finite() || value < 1.0 {
            return Err(EpicurveError::InvalidDilationClip(value));
        }
        Ok(())
    }

    /// Validate the initial shape factor.
    pub fn validate_shape<T: Float>(shape: T) -> Result<(), EpicurveError> {
        let value = shape.to_f64().unwrap_or(f64::NAN);
        if !(MIN_SHAPE..=MAX_SHAPE).contains(&value) {
            return Err(EpicurveError::InvalidShape(value));
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), EpicurveError> {
        if let Some(parameter) = duplicate_param {
            return Err(EpicurveError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
