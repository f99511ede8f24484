//! Execution engine for epidemic curve analysis.
//!
//! ## Purpose
//!
//! This module provides the configuration type and the executor that runs a
//! full analysis over one region's daily series: smoothing, milestone
//! detection, the per-metric curve fits, curve generation and diagnostics.
//! The executor is the central component that coordinates all lower-level
//! algorithms to produce a [`RegionModel`].
//!
//! ## Design notes
//!
//! * Configuration is an explicit immutable value; nothing is global.
//! * Each metric is fitted by the same parameterised routine.
//! * Soft failures (sparse data, unsettled fits) are logged and recorded on
//!   the model; only malformed input is an error.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Records are validated before any stage runs.
//! * A metric whose smoothed total is below 50 is never fitted.
//!
//! ## Non-goals
//!
//! * This module does not load or parse datasets.
//! * This module does not handle parallel execution (see the extension crate).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::curves::{CurveSpan, ModelCurve, generate_curve};
use crate::algorithms::fitting::{CurveFit, FitTarget, fit_curve, has_enough_data};
use crate::algorithms::milestones::{DetectorParams, Milestones, detect_milestones};
use crate::algorithms::smoothing::{SmoothingSummary, smooth_series};
use crate::engine::output::RegionModel;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::{
    Diagnostics, Outcome, consistency, modelled_share, per_area, per_million,
    projected_per_million, reported_share,
};
use crate::math::scaling::to_float;
use crate::primitives::errors::EpicurveError;
use crate::primitives::record::{DailyRecord, Metric, Region};
use crate::primitives::timeline::Timeline;
use crate::primitives::window::Window;

// ============================================================================
// Configuration
// ============================================================================

/// Day the generated curves are rescaled to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RescaleAnchor {
    /// The latest smoothed day, so the modelled total matches the data to date.
    #[default]
    LatestDay,

    /// The provisional end day when it has passed, otherwise the latest day.
    EndOrLatest,
}

/// Configuration for an analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpicurveConfig<T> {
    /// Smoothing window in days (coerced to odd).
    pub smoothing_window: usize,

    /// Expected days from start to peak cases.
    pub growth_days: usize,

    /// Expected days from peak cases to peak deaths.
    pub lag_days: usize,

    /// Infection-rate lookback in days.
    pub spread_days: usize,

    /// Post-peak stretch for the deaths curve.
    pub dilation_deaths: T,

    /// Post-peak stretch for the cases curve.
    pub dilation_cases: T,

    /// Upper bound on the end-day decay factor.
    pub dilation_clip: T,

    /// Starting shape factor for both fits.
    pub initial_shape: T,

    /// Day the generated curves are pinned to.
    pub rescale_anchor: RescaleAnchor,
}

impl<T: Float> Default for EpicurveConfig<T> {
    fn default() -> Self {
        Self {
            smoothing_window: 9,
            growth_days: 38,
            lag_days: 6,
            spread_days: 7,
            dilation_deaths: to_float(2.0),
            dilation_cases: to_float(2.0),
            dilation_clip: to_float(2.0),
            initial_shape: to_float(6.0),
            rescale_anchor: RescaleAnchor::LatestDay,
        }
    }
}

impl<T: Float> EpicurveConfig<T> {
    /// Smoothing window after odd coercion.
    #[inline]
    pub fn effective_window(&self) -> usize {
        Window::coerce_width(self.smoothing_window)
    }

    /// Parameters for the milestone detector.
    pub fn detector_params(&self) -> DetectorParams<T> {
        DetectorParams {
            growth_days: self.growth_days,
            lag_days: self.lag_days,
            spread_days: self.spread_days,
            dilation_cases: self.dilation_cases,
            dilation_clip: self.dilation_clip,
        }
    }

    /// Dilation applied to a metric's post-peak clock.
    #[inline]
    pub fn dilation_for(&self, metric: Metric) -> T {
        match metric {
            Metric::Cases => self.dilation_cases,
            Metric::Deaths => self.dilation_deaths,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for epidemic curve analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpicurveExecutor<T> {
    config: EpicurveConfig<T>,
}

// One metric's fit and the observations it was fitted against.
struct MetricModel<T> {
    target: FitTarget<T>,
    fit: CurveFit<T>,
    curve: ModelCurve<T>,
}

impl<T: Float> EpicurveExecutor<T> {
    /// Create an executor from a configuration.
    pub fn from_config(config: EpicurveConfig<T>) -> Self {
        Self { config }
    }

    /// The configuration this executor runs with.
    #[inline]
    pub fn config(&self) -> &EpicurveConfig<T> {
        &self.config
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the full analysis over one region's daily series.
    pub fn run(
        &self,
        region: Region,
        mut records: Vec<DailyRecord<T>>,
    ) -> Result<RegionModel<T>, EpicurveError> {
        let config = &self.config;
        Validator::validate_region(&region)?;
        Validator::validate_series(&records, config.smoothing_window)?;

        // Stage 1: smoothing
        let smoothing = smooth_series(&mut records, config.smoothing_window);
        let Some(last_smoothed) = smoothing.last_smoothed else {
            return Err(EpicurveError::TooFewDays {
                got: records.len(),
                min: smoothing.window,
            });
        };
        let Some(latest) = records.last() else {
            return Err(EpicurveError::EmptyInput);
        };
        let timeline = Timeline::new(records.len(), latest.date);
        debug!(
            "{}: {} days to {}, smoothed through {} ({}-day window)",
            region.code,
            records.len(),
            timeline.latest_date,
            records[last_smoothed].date,
            smoothing.window
        );

        // Stage 2: milestones
        let milestones = detect_milestones(
            &mut records,
            &timeline,
            last_smoothed,
            &config.detector_params(),
        );
        if !milestones.data_sufficient {
            warn!(
                "{}: fewer than 50 cumulative cases; milestones derived from configuration",
                region.code
            );
        }

        // Stage 3: fits and curves
        let cases = if milestones.data_sufficient {
            self.model_metric(Metric::Cases, &records, &timeline, &milestones, smoothing.cases_total)
        } else {
            None
        };
        let deaths =
            self.model_metric(Metric::Deaths, &records, &timeline, &milestones, smoothing.deaths_total);

        // Stage 4: diagnostics
        let diagnostics = self.diagnose(
            &region,
            &records,
            &timeline,
            &milestones,
            &smoothing,
            cases.as_ref(),
            deaths.as_ref(),
        );

        let mut warnings = Vec::new();
        for model in cases.iter().chain(deaths.iter()) {
            warnings.extend(model.fit.warnings.iter().copied());
        }

        let (cases_fit, cases_curve) = cases.map(|m| (m.fit, m.curve)).unzip();
        let (deaths_fit, deaths_curve) = deaths.map(|m| (m.fit, m.curve)).unzip();

        Ok(RegionModel {
            region,
            config: self.config,
            records,
            timeline,
            smoothing,
            milestones,
            cases_fit,
            deaths_fit,
            cases_curve,
            deaths_curve,
            diagnostics,
            warnings,
        })
    }

    // ========================================================================
    // Stages
    // ========================================================================

    // Fit and generate curves for one metric, or skip it when data is too sparse.
    fn model_metric(
        &self,
        metric: Metric,
        records: &[DailyRecord<T>],
        timeline: &Timeline,
        milestones: &Milestones<T>,
        smoothed_total: T,
    ) -> Option<MetricModel<T>> {
        if !has_enough_data(smoothed_total) {
            debug!("{}: smoothed total below threshold, not fitted", metric.label());
            return None;
        }

        let transform = match metric {
            Metric::Cases => milestones.cases_transform(self.config.dilation_cases),
            Metric::Deaths => milestones.deaths_transform(self.config.dilation_deaths),
        };
        let target = FitTarget::from_records(metric, records, timeline, milestones, transform);
        let fit = fit_curve(&target, self.config.initial_shape);

        let span = self.curve_span(metric, records, timeline, milestones, smoothed_total);
        let curve = generate_curve(&fit, span, self.config.spread_days);

        Some(MetricModel { target, fit, curve })
    }

    // Generated days and rescale anchor for one metric.
    fn curve_span(
        &self,
        metric: Metric,
        records: &[DailyRecord<T>],
        timeline: &Timeline,
        milestones: &Milestones<T>,
        smoothed_total: T,
    ) -> CurveSpan<T> {
        let latest = milestones.latest.day;
        let end = milestones.end.day;
        let anchor_day = match self.config.rescale_anchor {
            RescaleAnchor::LatestDay => latest,
            RescaleAnchor::EndOrLatest => end.min(latest),
        };
        let anchor_total = timeline
            .index_of(anchor_day)
            .and_then(|index| metric.smoothed_to_date(&records[index]))
            .unwrap_or(smoothed_total);

        CurveSpan {
            first_day: milestones.start.day,
            last_day: end.max(latest),
            end_day: end,
            anchor_day,
            anchor_total,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn diagnose(
        &self,
        region: &Region,
        records: &[DailyRecord<T>],
        timeline: &Timeline,
        milestones: &Milestones<T>,
        smoothing: &SmoothingSummary<T>,
        cases: Option<&MetricModel<T>>,
        deaths: Option<&MetricModel<T>>,
    ) -> Diagnostics<T> {
        let fit_consistency = |model: Option<&MetricModel<T>>, total: T| {
            model.and_then(|m| {
                m.target
                    .total_absolute_error(m.fit.scale, m.fit.shape)
                    .and_then(|error| consistency(error, total))
            })
        };

        let reported = |metric: Metric| records.last().map_or(0, |r| metric.to_date(r));
        let total_cases = reported(Metric::Cases);
        let total_deaths = reported(Metric::Deaths);
        let cases_per_million: T = per_million(total_cases, region.population);
        let deaths_per_million: T = per_million(total_deaths, region.population);

        let outcome = if milestones.has_ended() {
            let at_end = timeline
                .index_of(milestones.end.day)
                .and_then(|index| records.get(index));
            Outcome::Ended {
                cases: at_end.map_or(total_cases, |r| Metric::Cases.to_date(r)),
                deaths: at_end.map_or(total_deaths, |r| Metric::Deaths.to_date(r)),
                date: milestones.end.date,
            }
        } else {
            let by_end = |model: Option<&MetricModel<T>>| {
                model.and_then(|m| modelled_share(m.curve.final_total(), m.curve.asymptote))
            };
            let asymptote_rate = |model: Option<&MetricModel<T>>| {
                model.map(|m| projected_per_million(m.curve.asymptote, region.population))
            };
            Outcome::Projected {
                cases: cases.map(|m| m.curve.final_total()),
                deaths: deaths.map(|m| m.curve.final_total()),
                date: milestones.end.date,
                cases_reported: cases.and_then(|m| reported_share(total_cases, m.curve.asymptote)),
                deaths_reported: deaths
                    .and_then(|m| reported_share(total_deaths, m.curve.asymptote)),
                cases_by_end: by_end(cases),
                deaths_by_end: by_end(deaths),
                cases_per_million: asymptote_rate(cases),
                deaths_per_million: asymptote_rate(deaths),
            }
        };

        Diagnostics {
            cases_consistency: fit_consistency(cases, smoothing.cases_total),
            deaths_consistency: fit_consistency(deaths, smoothing.deaths_total),
            cases_per_million,
            deaths_per_million,
            cases_per_km2: per_area(cases_per_million, region.density),
            deaths_per_km2: per_area(deaths_per_million, region.density),
            outcome,
        }
    }
}
