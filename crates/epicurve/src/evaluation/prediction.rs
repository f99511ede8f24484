//! Forward projection from the generated model curves.
//!
//! ## Purpose
//!
//! This module reads the precomputed bell and sigmoid arrays forward from the
//! day after the latest smoothed day, producing one row per projected day
//! until the horizon or the end of the generated arrays.
//!
//! ## Design notes
//!
//! * **Lookup only**: No model evaluation happens here; rows index the curves.
//! * **Terminal states**: An outbreak past its provisional end, or one without
//!   a cases curve, yields a distinct [`Forecast`] variant instead of rows.
//! * **Default horizon**: A horizon of 0 projects `window / 2 + 1` days, which
//!   reaches just past the latest raw report.
//!
//! ## Non-goals
//!
//! * This module does not format tables.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use chrono::NaiveDate;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::curves::ModelCurve;
use crate::algorithms::milestones::{Milestone, Milestones};
use crate::primitives::timeline::Timeline;

/// One projected day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRow<T> {
    /// Relative day.
    pub day: isize,

    /// Calendar date.
    pub date: NaiveDate,

    /// Modelled new cases.
    pub cases: T,

    /// Modelled cumulative cases.
    pub cases_to_date: T,

    /// Modelled new deaths, when deaths were fitted.
    pub deaths: Option<T>,

    /// Modelled cumulative deaths, when deaths were fitted.
    pub deaths_to_date: Option<T>,

    /// Whether raw reports already cover this date.
    pub reported: bool,
}

/// Result of a projection request.
#[derive(Debug, Clone, PartialEq)]
pub enum Forecast<T> {
    /// Projected rows, possibly fewer than requested near the end of the cycle.
    Projected(Vec<ForecastRow<T>>),

    /// The provisional end lies before the latest report.
    Ended {
        /// The provisional end.
        end: Milestone,
    },

    /// No cases curve was generated.
    Unavailable,
}

impl<T> Forecast<T> {
    /// Projected rows, empty for the terminal variants.
    pub fn rows(&self) -> &[ForecastRow<T>] {
        match self {
            Self::Projected(rows) => rows,
            _ => &[],
        }
    }

    /// Whether the outbreak was judged over.
    #[inline]
    pub fn has_ended(&self) -> bool {
        matches!(self, Self::Ended { .. })
    }
}

/// Effective horizon: `horizon`, or `window / 2 + 1` when it is 0.
#[inline]
pub fn resolve_horizon(horizon: usize, window: usize) -> usize {
    if horizon == 0 { window / 2 + 1 } else { horizon }
}

/// Project `horizon` days past the latest smoothed day.
pub fn project<T: Float>(
    cases: Option<&ModelCurve<T>>,
    deaths: Option<&ModelCurve<T>>,
    milestones: &Milestones<T>,
    timeline: &Timeline,
    horizon: usize,
) -> Forecast<T> {
    if milestones.has_ended() {
        return Forecast::Ended {
            end: milestones.end,
        };
    }
    let Some(cases) = cases else {
        return Forecast::Unavailable;
    };

    let first = milestones.latest.day + 1;
    let mut rows = Vec::with_capacity(horizon);
    for day in first..first + horizon as isize {
        let Some((new_cases, cases_to_date)) = cases.at(day) else {
            break;
        };
        let modelled_deaths = deaths.and_then(|curve| curve.at(day));
        rows.push(ForecastRow {
            day,
            date: timeline.date_of(day),
            cases: new_cases,
            cases_to_date,
            deaths: modelled_deaths.map(|(new, _)| new),
            deaths_to_date: modelled_deaths.map(|(_, total)| total),
            reported: day <= 0,
        });
    }

    Forecast::Projected(rows)
}
