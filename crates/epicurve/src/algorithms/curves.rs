//! Bell and sigmoid curve generation from a fitted model.
//!
//! ## Purpose
//!
//! This module evaluates a fitted bell model over the whole cycle, rescales
//! it so the modelled cumulative total matches the smoothed cumulative total
//! at an anchor day, and accumulates the sigmoid (cumulative) curve. It also
//! derives the implied sigmoid asymptote and the modelled infection rate.
//!
//! ## Design notes
//!
//! * **Two-stage rescale**: The fit already passes through one observed point;
//!   the global rescale then pins the cumulative total at the anchor day.
//! * **Dense arrays**: Curves are indexed from the start day, one entry per day.
//!
//! ## Invariants
//!
//! * The sigmoid at the anchor day equals the anchor total (when the modelled
//!   total up to it is positive).
//! * The sigmoid is non-decreasing because every bell value is non-negative.
//!
//! ## Non-goals
//!
//! * This module does not choose the span or anchor (see the executor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fitting::CurveFit;
use crate::math::logistic::sigmoid_scale;
use crate::math::scaling::rescale_factor;
use crate::primitives::record::Metric;

/// Days a curve covers and where it is pinned to the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpan<T> {
    /// First generated day (the start).
    pub first_day: isize,

    /// Last generated day, inclusive.
    pub last_day: isize,

    /// Provisional end day, used for the asymptote.
    pub end_day: isize,

    /// Day whose smoothed cumulative total the curve is rescaled to.
    pub anchor_day: isize,

    /// Smoothed cumulative total at the anchor day.
    pub anchor_total: T,
}

/// Generated model curves for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCurve<T> {
    /// Metric the curve models.
    pub metric: Metric,

    /// Relative day of index 0.
    pub start_day: isize,

    /// Rescaled new counts per day.
    pub bell: Vec<T>,

    /// Running sum of `bell`.
    pub sigmoid: Vec<T>,

    /// Global factor applied to the raw bell values.
    pub rescale: T,

    /// Implied sigmoid asymptote `X` (final cumulative total).
    pub asymptote: T,

    /// Modelled infection rate `bell[i] / bell[i − spread]`.
    pub infection: Vec<Option<T>>,
}

impl<T: Float> ModelCurve<T> {
    /// Number of generated days.
    #[inline]
    pub fn len(&self) -> usize {
        self.bell.len()
    }

    /// Whether no days were generated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bell.is_empty()
    }

    /// Relative day of the last generated entry.
    #[inline]
    pub fn last_day(&self) -> isize {
        self.start_day + self.len() as isize - 1
    }

    /// `(new, cumulative)` modelled counts on a relative day, if generated.
    pub fn at(&self, day: isize) -> Option<(T, T)> {
        let offset = day - self.start_day;
        if offset < 0 {
            return None;
        }
        let index = offset as usize;
        Some((*self.bell.get(index)?, *self.sigmoid.get(index)?))
    }

    /// Modelled cumulative total at the end of the generated span.
    #[inline]
    pub fn final_total(&self) -> T {
        self.sigmoid.last().copied().unwrap_or_else(T::zero)
    }
}

/// Generate rescaled bell and sigmoid curves for a fit over `span`.
pub fn generate_curve<T: Float>(fit: &CurveFit<T>, span: CurveSpan<T>, spread: usize) -> ModelCurve<T> {
    let raw: Vec<T> = (span.first_day..=span.last_day)
        .map(|day| fit.amplitude_at(day))
        .collect();

    let modelled_to_anchor = (span.first_day..=span.last_day)
        .zip(raw.iter())
        .take_while(|&(day, _)| day <= span.anchor_day)
        .fold(T::zero(), |acc, (_, &value)| acc + value);
    let rescale = rescale_factor(span.anchor_total, modelled_to_anchor);

    let bell: Vec<T> = raw.iter().map(|&value| value * rescale).collect();
    let sigmoid: Vec<T> = bell
        .iter()
        .scan(T::zero(), |total, &value| {
            *total = *total + value;
            Some(*total)
        })
        .collect();

    let final_total = sigmoid.last().copied().unwrap_or_else(T::zero);
    let asymptote = sigmoid_scale(final_total, fit.shape, fit.transform.t(span.end_day));

    let infection = (0..bell.len())
        .map(|i| {
            if i >= spread && bell[i - spread] != T::zero() {
                Some(bell[i] / bell[i - spread])
            } else {
                None
            }
        })
        .collect();

    ModelCurve {
        metric: fit.metric,
        start_day: span.first_day,
        bell,
        sigmoid,
        rescale,
        asymptote,
        infection,
    }
}
