//! Output types for an analysed region.
//!
//! ## Purpose
//!
//! This module defines [`RegionModel`], the read-only aggregate produced by an
//! analysis: the decorated daily records, milestones, fitted parameters,
//! generated curves, diagnostics and any fit warnings.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Fits and curves are `Option`s; a metric with too
//!   little data is simply absent.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * Records are in ascending date order and carry every decoration the
//!   pipeline produced.
//! * Curves, when present, start on the start day.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond lookups.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::curves::ModelCurve;
use crate::algorithms::fitting::{CurveFit, FitWarning};
use crate::algorithms::milestones::Milestones;
use crate::algorithms::smoothing::SmoothingSummary;
use crate::engine::executor::EpicurveConfig;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::prediction::{Forecast, project, resolve_horizon};
use crate::primitives::record::{DailyRecord, Metric, Region};
use crate::primitives::timeline::Timeline;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete analysis of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionModel<T> {
    /// Region identity.
    pub region: Region,

    /// Configuration the analysis ran with.
    pub config: EpicurveConfig<T>,

    /// Decorated daily records.
    pub records: Vec<DailyRecord<T>>,

    /// Relative day numbering for `records`.
    pub timeline: Timeline,

    /// Smoothing pass summary.
    pub smoothing: SmoothingSummary<T>,

    /// Detected milestones.
    pub milestones: Milestones<T>,

    /// Cases fit, when cases were fitted.
    pub cases_fit: Option<CurveFit<T>>,

    /// Deaths fit, when deaths were fitted.
    pub deaths_fit: Option<CurveFit<T>>,

    /// Generated cases curves.
    pub cases_curve: Option<ModelCurve<T>>,

    /// Generated deaths curves.
    pub deaths_curve: Option<ModelCurve<T>>,

    /// Consistency, rates and outcome.
    pub diagnostics: Diagnostics<T>,

    /// All non-fatal fit conditions, cases first.
    pub warnings: Vec<FitWarning>,
}

impl<T: Float> RegionModel<T> {
    /// Project the fitted curves `horizon` days past the latest smoothed day.
    ///
    /// A horizon of 0 projects `window / 2 + 1` days.
    pub fn forecast(&self, horizon: usize) -> Forecast<T> {
        let horizon = resolve_horizon(horizon, self.smoothing.window);
        project(
            self.cases_curve.as_ref(),
            self.deaths_curve.as_ref(),
            &self.milestones,
            &self.timeline,
            horizon,
        )
    }

    /// The last `days` records.
    pub fn recent(&self, days: usize) -> &[DailyRecord<T>] {
        &self.records[self.records.len().saturating_sub(days)..]
    }

    /// Record on a relative day, if inside the series.
    pub fn record_on(&self, day: isize) -> Option<&DailyRecord<T>> {
        self.timeline.index_of(day).map(|index| &self.records[index])
    }

    /// Fit for a metric.
    pub fn fit(&self, metric: Metric) -> Option<&CurveFit<T>> {
        match metric {
            Metric::Cases => self.cases_fit.as_ref(),
            Metric::Deaths => self.deaths_fit.as_ref(),
        }
    }

    /// Generated curve for a metric.
    pub fn curve(&self, metric: Metric) -> Option<&ModelCurve<T>> {
        match metric {
            Metric::Cases => self.cases_curve.as_ref(),
            Metric::Deaths => self.deaths_curve.as_ref(),
        }
    }

    /// Whether any fit finished with a warning.
    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn f64_of<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> Display for RegionModel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let m = &self.milestones;
        let latest = self.records.last();

        writeln!(f, "{} data to end of {}:", self.region.name, self.timeline.latest_date)?;
        if let Some(r) = latest {
            writeln!(f, "  {} cases, {} deaths", r.cases_to_date, r.deaths_to_date)?;
        }
        writeln!(f)?;

        writeln!(f, "Timeline: (-ve days are past, +ve days are predicted)")?;
        if m.has_ended() {
            writeln!(f, "  Now:         past end of first outbreak")?;
        } else {
            writeln!(f, "  Now:         {:.0}% through outbreak", f64_of(m.position) * 100.0)?;
        }
        writeln!(f, "  Start:       {} ({:4} days)", m.start.date, m.start.day)?;
        writeln!(f, "  Peak Cases:  {} ({:4} days)", m.peak_cases.date, m.peak_cases.day)?;
        writeln!(
            f,
            "  End:         {} ({:4} days, {} days after peak cases)",
            m.end.date,
            m.end.day,
            m.end.day - m.peak_cases.day
        )?;
        if let Some(day_zero) = m.day_zero {
            writeln!(f, "  Day Zero:    {} ({:4} days)", day_zero.date, day_zero.day)?;
        }
        if self.deaths_fit.is_some() {
            writeln!(f, "  Peak Deaths: {} ({:4} days)", m.peak_deaths.date, m.peak_deaths.day)?;
        }
        writeln!(f)?;

        writeln!(f, "Parameters:")?;
        writeln!(
            f,
            "  Smoothed:    {:.0} cases and {:.0} deaths at end of {} ({} points)",
            f64_of(self.smoothing.cases_total),
            f64_of(self.smoothing.deaths_total),
            m.latest.date,
            self.smoothing.window
        )?;
        if let Some(peak) = m.infection_peak {
            writeln!(
                f,
                "  Spread:      peak infection rate {:.1} ({})",
                f64_of(peak.rate),
                peak.at.date
            )?;
        }
        if let Some(latest) = m.infection_latest {
            writeln!(
                f,
                "               latest infection rate {:.1} ({})",
                f64_of(latest.rate),
                latest.at.date
            )?;
        }
        writeln!(f, "  Growth:      {} days (Start -> Peak Cases)", m.growth_days)?;
        for (fit, curve) in [
            (&self.cases_fit, &self.cases_curve),
            (&self.deaths_fit, &self.deaths_curve),
        ] {
            if let (Some(fit), Some(curve)) = (fit, curve) {
                writeln!(
                    f,
                    "               X = {:.0}, r = {:.2}, L = {:.0}, dilation = {} for {}",
                    f64_of(curve.asymptote),
                    f64_of(fit.shape),
                    f64_of(fit.scale),
                    f64_of(self.config.dilation_for(fit.metric)),
                    fit.metric.label()
                )?;
            }
        }
        if self.deaths_fit.is_some() {
            writeln!(f, "  Lag:         {} days (Peak Cases -> Peak Deaths)", m.lag_days)?;
        }
        for warning in &self.warnings {
            writeln!(f, "  Warning:     {warning}")?;
        }
        writeln!(f)?;

        write!(f, "{}", self.diagnostics)
    }
}
