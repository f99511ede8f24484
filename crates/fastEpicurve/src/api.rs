//! High-level API for epidemic curve analysis with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for analysing many
//! regions at once. It extends the `epicurve` builder with a parallel
//! execution switch and adds batch and count-array entry points.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `epicurve` builder.
//! * **Parallel-First**: Defaults to parallel execution across regions.
//! * **Feature-Gated**: Parallelism is available with the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelEpicurveBuilder`] via `ParallelEpicurve::new()`.
//! 2. Chain configuration methods (`.smoothing_window()`, `.parallel()`, etc.).
//! 3. Call `.build()` and then `.analyse_all(batch)`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::analyse_parallel;

// External dependencies
use chrono::NaiveDate;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::analyse_sequential;

// Publicly re-exported types
pub use crate::engine::executor::BatchResults;
pub use crate::input::{CountInput, RegionSeries};
pub use epicurve::internals::api::{
    Calibrated, CurveFit, DailyRecord, Diagnostics, Epicurve, EpicurveBuilder, EpicurveConfig,
    EpicurveError, FitWarning, Forecast, ForecastRow, Metric, Milestone, Milestones, ModelCurve,
    Outcome, Region, RegionModel, RescaleAnchor,
};

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for a multi-region analyser with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelEpicurveBuilder<T: Float> {
    /// Base builder from the epicurve crate.
    pub base: EpicurveBuilder<T>,

    /// Parallel execution across regions.
    pub parallel: Option<bool>,
}

impl<T: Float> Default for ParallelEpicurveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelEpicurveBuilder<T> {
    /// Create a builder with the base defaults and parallel execution on.
    pub fn new() -> Self {
        Self {
            base: EpicurveBuilder::new(),
            parallel: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the smoothing window in days.
    pub fn smoothing_window(mut self, days: usize) -> Self {
        self.base = self.base.smoothing_window(days);
        self
    }

    /// Set the expected days from start to peak cases.
    pub fn growth_days(mut self, days: usize) -> Self {
        self.base = self.base.growth_days(days);
        self
    }

    /// Set the expected days from peak cases to peak deaths.
    pub fn lag_days(mut self, days: usize) -> Self {
        self.base = self.base.lag_days(days);
        self
    }

    /// Set the infection-rate lookback in days.
    pub fn spread_days(mut self, days: usize) -> Self {
        self.base = self.base.spread_days(days);
        self
    }

    /// Set the post-peak stretch for deaths.
    pub fn dilation_deaths(mut self, dilation: T) -> Self {
        self.base = self.base.dilation_deaths(dilation);
        self
    }

    /// Set the post-peak stretch for cases.
    pub fn dilation_cases(mut self, dilation: T) -> Self {
        self.base = self.base.dilation_cases(dilation);
        self
    }

    /// Set the clip applied to the end-day decay factor.
    pub fn dilation_clip(mut self, clip: T) -> Self {
        self.base = self.base.dilation_clip(clip);
        self
    }

    /// Set the starting shape factor for both fits.
    pub fn initial_shape(mut self, shape: T) -> Self {
        self.base = self.base.initial_shape(shape);
        self
    }

    /// Set the day the generated curves are pinned to.
    pub fn rescale_anchor(mut self, anchor: RescaleAnchor) -> Self {
        self.base = self.base.rescale_anchor(anchor);
        self
    }

    /// Validate the configuration and build the analyser.
    pub fn build(self) -> Result<ParallelEpicurve<T>, EpicurveError> {
        let parallel = self.parallel.unwrap_or(true);
        let model = self.base.build()?;
        Ok(ParallelEpicurve { model, parallel })
    }
}

// ============================================================================
// Parallel Analyser
// ============================================================================

/// Validated analyser that processes batches of regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelEpicurve<T> {
    model: Epicurve<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelEpicurve<T> {
    /// Start configuring an analyser.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ParallelEpicurveBuilder<T> {
        ParallelEpicurveBuilder::new()
    }

    /// The single-region analyser this wraps.
    #[inline]
    pub fn model(&self) -> &Epicurve<T> {
        &self.model
    }

    /// Whether batches are analysed in parallel.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Analyse one region's daily series.
    pub fn analyse(&self, series: RegionSeries<T>) -> Result<RegionModel<T>, EpicurveError> {
        self.model.analyse(series.region, series.records)
    }

    /// Analyse one region from consecutive daily counts starting on `first_date`.
    pub fn analyse_counts<C, D>(
        &self,
        region: Region,
        first_date: NaiveDate,
        cases: &C,
        deaths: &D,
    ) -> Result<RegionModel<T>, EpicurveError>
    where
        C: CountInput + ?Sized,
        D: CountInput + ?Sized,
    {
        self.analyse(RegionSeries::from_counts(region, first_date, cases, deaths)?)
    }

    /// Analyse a batch of regions, returning results in input order.
    pub fn analyse_all(&self, batch: Vec<RegionSeries<T>>) -> BatchResults<T> {
        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                return analyse_parallel(&self.model, batch);
            }
        }
        analyse_sequential(&self.model, batch)
    }
}
