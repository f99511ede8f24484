//! Alternating scale/shape fit of the bell model to one metric.
//!
//! ## Purpose
//!
//! This module fits `L` (scale) and `r` (shape) of the bell model to the
//! smoothed new cases or deaths. Each round solves `L` in closed form so the
//! curve passes through the smoothed value at an anchor day, then refines `r`
//! by coordinate descent with that `L` held fixed. Rounds stop once the
//! truncated `L` and the two-decimal `r` repeat.
//!
//! ## Design notes
//!
//! * **Precomputed targets**: The scaled times and observed values of the
//!   fitting window are computed once per metric.
//! * **Soft failures**: Hitting a round or probe cap is recorded as a
//!   [`FitWarning`] and logged; the last computed values are kept.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Anchor**: The metric's peak day if it precedes the latest smoothed day,
//!   otherwise the latest smoothed day.
//! * **Fitting window**: Days from the start to `min(end, latest)` that carry a
//!   smoothed value.
//! * **Error**: Mean absolute error over the fitting window.
//!
//! ## Invariants
//!
//! * At most 10 rounds, each with at most 16 shape probes.
//! * The fitted shape lies in [4, 8].
//!
//! ## Non-goals
//!
//! * This module does not rescale or generate curves (see `curves`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::descent::descend_shape;
use crate::algorithms::milestones::Milestones;
use crate::math::logistic::{bell_amplitude, bell_scale};
use crate::math::scaling::{round_to, to_float};
use crate::math::transform::CycleTransform;
use crate::primitives::record::{DailyRecord, Metric};
use crate::primitives::timeline::Timeline;

// ============================================================================
// Constants
// ============================================================================

/// Smoothed cumulative total a metric needs before it is fitted.
pub const MIN_FIT_TOTAL: f64 = 50.0;

/// Cap on scale/shape rounds.
pub const MAX_FIT_ROUNDS: usize = 10;

/// Whether a metric with this smoothed cumulative total should be fitted.
#[inline]
pub fn has_enough_data<T: Float>(smoothed_total: T) -> bool {
    smoothed_total >= to_float(MIN_FIT_TOTAL)
}

// ============================================================================
// Warnings
// ============================================================================

/// Non-fatal fitting condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitWarning {
    /// The shape descent hit its probe cap in the given round.
    ShapeNotConverged {
        /// Metric being fitted.
        metric: Metric,
        /// Zero-based fit round.
        round: usize,
    },

    /// The scale/shape rounds hit their cap without repeating.
    ScaleNotConverged {
        /// Metric being fitted.
        metric: Metric,
    },
}

impl Display for FitWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ShapeNotConverged { metric, round } => write!(
                f,
                "{} shape search did not settle in round {round}",
                metric.label()
            ),
            Self::ScaleNotConverged { metric } => write!(
                f,
                "{} fit was not solved within {MAX_FIT_ROUNDS} rounds",
                metric.label()
            ),
        }
    }
}

// ============================================================================
// Fit Target
// ============================================================================

/// Observations one metric is fitted against.
#[derive(Debug, Clone, PartialEq)]
pub struct FitTarget<T> {
    /// Metric being fitted.
    pub metric: Metric,

    /// Day-to-`t` transform for the metric.
    pub transform: CycleTransform<T>,

    /// Anchor day the scale is solved at.
    pub anchor_day: isize,

    /// Smoothed value at the anchor day.
    pub anchor_value: T,

    /// `(t, smoothed value)` over the fitting window.
    pub points: Vec<(T, T)>,
}

impl<T: Float> FitTarget<T> {
    /// Collect the fitting window for `metric`.
    pub fn from_records(
        metric: Metric,
        records: &[DailyRecord<T>],
        timeline: &Timeline,
        milestones: &Milestones<T>,
        transform: CycleTransform<T>,
    ) -> Self {
        let latest = milestones.latest.day;
        let peak = match metric {
            Metric::Cases => milestones.peak_cases.day,
            Metric::Deaths => milestones.peak_deaths.day,
        };

        let value_at = |day: isize| {
            timeline
                .index_of(day)
                .and_then(|index| metric.smoothed(&records[index]))
        };

        let (anchor_day, anchor_value) = match value_at(peak) {
            Some(value) if peak < latest => (peak, value),
            _ => (latest, value_at(latest).unwrap_or_else(T::zero)),
        };

        let last = milestones.end.day.min(latest);
        let points = (milestones.start.day..=last)
            .filter_map(|day| value_at(day).map(|value| (transform.t(day), value)))
            .collect();

        Self {
            metric,
            transform,
            anchor_day,
            anchor_value,
            points,
        }
    }

    /// Σ |observed − modelled| over the fitting window, or `None` when empty.
    pub fn total_absolute_error(&self, scale: T, shape: T) -> Option<T> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().fold(T::zero(), |acc, &(t, value)| {
            acc + (value - bell_amplitude(scale, shape, t)).abs()
        }))
    }

    /// Mean absolute error over the fitting window, or `None` when empty.
    pub fn mean_absolute_error(&self, scale: T, shape: T) -> Option<T> {
        self.total_absolute_error(scale, shape)
            .map(|total| total / to_float(self.points.len()))
    }
}

// ============================================================================
// Curve Fit
// ============================================================================

/// Fitted bell parameters for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFit<T> {
    /// Metric that was fitted.
    pub metric: Metric,

    /// Bell scale `L`.
    pub scale: T,

    /// Bell shape `r`.
    pub shape: T,

    /// Rounds completed before the parameters repeated (or the cap).
    pub rounds: usize,

    /// Anchor day the scale was solved at.
    pub anchor_day: isize,

    /// Transform the parameters apply to.
    pub transform: CycleTransform<T>,

    /// Non-fatal conditions hit during the fit.
    pub warnings: Vec<FitWarning>,
}

impl<T: Float> CurveFit<T> {
    /// Modelled new count on a relative day.
    #[inline]
    pub fn amplitude_at(&self, day: isize) -> T {
        bell_amplitude(self.scale, self.shape, self.transform.t(day))
    }

    /// Whether the fit finished without warnings.
    #[inline]
    pub fn converged(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Fit scale and shape to `target`, starting the shape at `initial_shape`.
pub fn fit_curve<T: Float>(target: &FitTarget<T>, initial_shape: T) -> CurveFit<T> {
    let metric = target.metric;
    let anchor_t = target.transform.t(target.anchor_day);

    let mut shape = initial_shape;
    let mut scale = T::zero();
    let mut previous: Option<(T, T)> = None;
    let mut warnings = Vec::new();
    let mut rounds = 0;
    let mut solved = false;

    while rounds < MAX_FIT_ROUNDS {
        scale = bell_scale(target.anchor_value, shape, anchor_t);

        let descent = descend_shape(shape, |r| target.mean_absolute_error(scale, r));
        shape = descent.shape;
        if !descent.converged {
            let warning = FitWarning::ShapeNotConverged { metric, round: rounds };
            warn!("{warning}");
            warnings.push(warning);
        }

        debug!(
            "{} round {rounds}: L = {:.0}, r = {:.2}",
            metric.label(),
            scale.to_f64().unwrap_or(f64::NAN),
            shape.to_f64().unwrap_or(f64::NAN)
        );

        let key = (scale.trunc(), round_to(shape, 2));
        if previous == Some(key) {
            solved = true;
            break;
        }
        previous = Some(key);
        rounds += 1;
    }

    if !solved {
        let warning = FitWarning::ScaleNotConverged { metric };
        warn!("{warning}");
        warnings.push(warning);
    }

    CurveFit {
        metric,
        scale,
        shape,
        rounds,
        anchor_day: target.anchor_day,
        transform: target.transform,
        warnings,
    }
}
