//! High-level API for epidemic curve analysis.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the analysis parameters and produces an immutable,
//! validated [`Epicurve`] analyser that can be applied to any number of
//! regions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with documented defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Deferred**: Setting a parameter twice is reported at `.build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`EpicurveBuilder`] via `Epicurve::new()`.
//! 2. Chain configuration methods (`.smoothing_window()`, `.growth_days()`, etc.).
//! 3. Call `.build()` to obtain an [`Epicurve`], then `.analyse(region, records)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::EpicurveExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::curves::ModelCurve;
pub use crate::algorithms::fitting::{CurveFit, FitWarning};
pub use crate::algorithms::milestones::{InfectionPoint, Milestone, Milestones};
pub use crate::algorithms::smoothing::SmoothingSummary;
pub use crate::engine::executor::{EpicurveConfig, RescaleAnchor};
pub use crate::engine::output::RegionModel;
pub use crate::evaluation::diagnostics::{Diagnostics, Outcome};
pub use crate::evaluation::prediction::{Forecast, ForecastRow};
pub use crate::primitives::calibrated::Calibrated;
pub use crate::primitives::errors::EpicurveError;
pub use crate::primitives::record::{DailyRecord, Metric, Region};
pub use crate::primitives::timeline::Timeline;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an analysis.
#[derive(Debug, Clone)]
pub struct EpicurveBuilder<T> {
    /// Smoothing window in days (coerced to odd).
    pub smoothing_window: Option<usize>,

    /// Expected start-to-peak days.
    pub growth_days: Option<usize>,

    /// Expected peak-cases-to-peak-deaths days.
    pub lag_days: Option<usize>,

    /// Infection-rate lookback in days.
    pub spread_days: Option<usize>,

    /// Post-peak stretch for deaths.
    pub dilation_deaths: Option<T>,

    /// Post-peak stretch for cases (defaults to the deaths dilation).
    pub dilation_cases: Option<T>,

    /// Clip applied to the end-day decay factor.
    pub dilation_clip: Option<T>,

    /// Starting shape factor for both fits.
    pub initial_shape: Option<T>,

    /// Day the generated curves are pinned to.
    pub rescale_anchor: Option<RescaleAnchor>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for EpicurveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> EpicurveBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            smoothing_window: None,
            growth_days: None,
            lag_days: None,
            spread_days: None,
            dilation_deaths: None,
            dilation_cases: None,
            dilation_clip: None,
            initial_shape: None,
            rescale_anchor: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing window in days (default 9, coerced to odd).
    pub fn smoothing_window(mut self, days: usize) -> Self {
        if self.smoothing_window.is_some() {
            self.duplicate_param = Some("smoothing_window");
        }
        self.smoothing_window = Some(days);
        self
    }

    /// Set the expected days from start to peak cases (default 38).
    pub fn growth_days(mut self, days: usize) -> Self {
        if self.growth_days.is_some() {
            self.duplicate_param = Some("growth_days");
        }
        self.growth_days = Some(days);
        self
    }

    /// Set the expected days from peak cases to peak deaths (default 6).
    pub fn lag_days(mut self, days: usize) -> Self {
        if self.lag_days.is_some() {
            self.duplicate_param = Some("lag_days");
        }
        self.lag_days = Some(days);
        self
    }

    /// Set the infection-rate lookback in days (default 7).
    pub fn spread_days(mut self, days: usize) -> Self {
        if self.spread_days.is_some() {
            self.duplicate_param = Some("spread_days");
        }
        self.spread_days = Some(days);
        self
    }

    /// Set the post-peak stretch for deaths (default 2.0).
    pub fn dilation_deaths(mut self, dilation: T) -> Self {
        if self.dilation_deaths.is_some() {
            self.duplicate_param = Some("dilation_deaths");
        }
        self.dilation_deaths = Some(dilation);
        self
    }

    /// Set the post-peak stretch for cases (default: the deaths dilation).
    pub fn dilation_cases(mut self, dilation: T) -> Self {
        if self.dilation_cases.is_some() {
            self.duplicate_param = Some("dilation_cases");
        }
        self.dilation_cases = Some(dilation);
        self
    }

    /// Set the clip applied to the end-day decay factor (default 2.0).
    pub fn dilation_clip(mut self, clip: T) -> Self {
        if self.dilation_clip.is_some() {
            self.duplicate_param = Some("dilation_clip");
        }
        self.dilation_clip = Some(clip);
        self
    }

    /// Set the starting shape factor for both fits (default 6.0).
    pub fn initial_shape(mut self, shape: T) -> Self {
        if self.initial_shape.is_some() {
            self.duplicate_param = Some("initial_shape");
        }
        self.initial_shape = Some(shape);
        self
    }

    /// Set the day the generated curves are pinned to (default `LatestDay`).
    pub fn rescale_anchor(mut self, anchor: RescaleAnchor) -> Self {
        if self.rescale_anchor.is_some() {
            self.duplicate_param = Some("rescale_anchor");
        }
        self.rescale_anchor = Some(anchor);
        self
    }

    /// Resolve unset parameters to their defaults.
    pub fn to_config(&self) -> EpicurveConfig<T> {
        let defaults = EpicurveConfig::default();
        let dilation_deaths = self.dilation_deaths.unwrap_or(defaults.dilation_deaths);
        EpicurveConfig {
            smoothing_window: self.smoothing_window.unwrap_or(defaults.smoothing_window),
            growth_days: self.growth_days.unwrap_or(defaults.growth_days),
            lag_days: self.lag_days.unwrap_or(defaults.lag_days),
            spread_days: self.spread_days.unwrap_or(defaults.spread_days),
            dilation_deaths,
            dilation_cases: self.dilation_cases.unwrap_or(dilation_deaths),
            dilation_clip: self.dilation_clip.unwrap_or(defaults.dilation_clip),
            initial_shape: self.initial_shape.unwrap_or(defaults.initial_shape),
            rescale_anchor: self.rescale_anchor.unwrap_or(defaults.rescale_anchor),
        }
    }

    /// Validate the configuration and build the analyser.
    pub fn build(self) -> Result<Epicurve<T>, EpicurveError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = self.to_config();

        // Validate day counts
        Validator::validate_smoothing_window(config.smoothing_window)?;
        Validator::validate_growth_days(config.growth_days)?;
        Validator::validate_lag_days(config.lag_days)?;
        Validator::validate_spread_days(config.spread_days)?;

        // Validate dilation and shape
        Validator::validate_dilation(config.dilation_deaths)?;
        Validator::validate_dilation(config.dilation_cases)?;
        Validator::validate_dilation_clip(config.dilation_clip)?;
        Validator::validate_shape(config.initial_shape)?;

        Ok(Epicurve {
            executor: EpicurveExecutor::from_config(config),
        })
    }
}

// ============================================================================
// Analyser
// ============================================================================

/// Validated, immutable analyser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicurve<T> {
    executor: EpicurveExecutor<T>,
}

impl<T: Float> Epicurve<T> {
    /// Start configuring an analyser.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> EpicurveBuilder<T> {
        EpicurveBuilder::new()
    }

    /// The resolved configuration.
    #[inline]
    pub fn config(&self) -> &EpicurveConfig<T> {
        self.executor.config()
    }

    /// Analyse one region's daily series.
    pub fn analyse(
        &self,
        region: Region,
        records: Vec<DailyRecord<T>>,
    ) -> Result<RegionModel<T>, EpicurveError> {
        self.executor.run(region, records)
    }
}
