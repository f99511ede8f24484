//! Centred moving-average smoothing of daily counts.
//!
//! ## Purpose
//!
//! This module converts raw daily case and death counts into a smoothed
//! series. Each day with a full centred window gets the arithmetic mean of the
//! raw counts inside the window; the whole smoothed series is then rescaled so
//! that its running total matches the reported cumulative total at the last
//! smoothed day.
//!
//! ## Design notes
//!
//! * **Odd windows**: The window width is coerced to odd before use.
//! * **Single factor**: One rescale factor per metric, applied to every day.
//! * **In place**: Smoothed fields are written onto the records.
//!
//! ## Invariants
//!
//! * Days without a full window have no smoothed value.
//! * Σ smoothed cases up to the last smoothed day equals `cases_to_date` there
//!   (likewise for deaths) whenever the unscaled sum is positive.
//!
//! ## Non-goals
//!
//! * Smoothing is not idempotent: re-smoothing smoothed output rescales against
//!   different cumulative totals and generally changes the values.
//! * This module does not reject short series (see `Validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::{rescale_factor, to_float};
use crate::primitives::record::DailyRecord;
use crate::primitives::window::Window;

// ============================================================================
// Summary
// ============================================================================

/// Outcome of a smoothing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingSummary<T> {
    /// Window width actually used (always odd).
    pub window: usize,

    /// Index of the first smoothed record.
    pub first_smoothed: Option<usize>,

    /// Index of the last smoothed record.
    pub last_smoothed: Option<usize>,

    /// Factor applied to the averaged cases.
    pub cases_rescale: T,

    /// Factor applied to the averaged deaths.
    pub deaths_rescale: T,

    /// Smoothed cumulative cases at the last smoothed record.
    pub cases_total: T,

    /// Smoothed cumulative deaths at the last smoothed record.
    pub deaths_total: T,
}

impl<T> SmoothingSummary<T> {
    /// Whether at least one record received a smoothed value.
    #[inline]
    pub fn has_smoothed(&self) -> bool {
        self.last_smoothed.is_some()
    }
}

// ============================================================================
// Smoothing
// ============================================================================

/// Smooth a daily series in place and rescale it to the reported totals.
pub fn smooth_series<T: Float>(records: &mut [DailyRecord<T>], window: usize) -> SmoothingSummary<T> {
    let width = Window::coerce_width(window);
    let n = records.len();

    let mut first_smoothed = None;
    let mut last_smoothed = None;
    let mut sum_cases = T::zero();
    let mut sum_deaths = T::zero();

    // Pass 1: centred averages
    for i in 0..n {
        let Some(win) = Window::centered(i, width, n) else {
            records[i].smoothed_cases = None;
            records[i].smoothed_deaths = None;
            continue;
        };

        let (cases, deaths) = records[win.range()]
            .iter()
            .fold((T::zero(), T::zero()), |(c, d), r| {
                (c + to_float(r.raw_cases), d + to_float(r.raw_deaths))
            });
        let divisor: T = to_float(win.len());
        let cases = cases / divisor;
        let deaths = deaths / divisor;

        records[i].smoothed_cases = Some(cases);
        records[i].smoothed_deaths = Some(deaths);
        sum_cases = sum_cases + cases;
        sum_deaths = sum_deaths + deaths;

        first_smoothed.get_or_insert(i);
        last_smoothed = Some(i);
    }

    let (cases_rescale, deaths_rescale) = match last_smoothed {
        Some(last) => (
            rescale_factor(to_float(records[last].cases_to_date), sum_cases),
            rescale_factor(to_float(records[last].deaths_to_date), sum_deaths),
        ),
        None => (T::one(), T::one()),
    };

    // Pass 2: rescale and accumulate
    let mut cases_total = T::zero();
    let mut deaths_total = T::zero();
    for record in records.iter_mut() {
        record.smoothed_cases_to_date = None;
        record.smoothed_deaths_to_date = None;

        let (Some(cases), Some(deaths)) = (record.smoothed_cases, record.smoothed_deaths) else {
            continue;
        };
        let cases = cases * cases_rescale;
        let deaths = deaths * deaths_rescale;
        cases_total = cases_total + cases;
        deaths_total = deaths_total + deaths;

        record.smoothed_cases = Some(cases);
        record.smoothed_deaths = Some(deaths);
        record.smoothed_cases_to_date = Some(cases_total);
        record.smoothed_deaths_to_date = Some(deaths_total);
    }

    SmoothingSummary {
        window: width,
        first_smoothed,
        last_smoothed,
        cases_rescale,
        deaths_rescale,
        cases_total,
        deaths_total,
    }
}
