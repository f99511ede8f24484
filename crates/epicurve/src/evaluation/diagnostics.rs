//! Fit consistency, population-relative rates and outcome.
//!
//! ## Purpose
//!
//! This module summarises a fitted region for readers: how closely each
//! model tracks the smoothed data, the reported totals per million people
//! (and per km² when density is known), and the projected or realised
//! outcome of the first cycle.
//!
//! ## Design notes
//!
//! * **Zero guards**: A zero population or zero smoothed total yields 0 or
//!   `None` instead of a division by zero.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Consistency**: `C = 1 − Σ|error| / smoothed_total`; 1 is a perfect fit.
//! * **Outcome**: Realised totals at the end day once it has passed,
//!   otherwise the modelled final totals, the shares of the asymptote reported
//!   so far and modelled by the end date, and the asymptote per million.
//!
//! ## Non-goals
//!
//! * This module does not provide confidence intervals.

// External dependencies
use chrono::NaiveDate;
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::to_float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Summary metrics for one analysed region.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Consistency of the cases fit, when fitted.
    pub cases_consistency: Option<T>,

    /// Consistency of the deaths fit, when fitted.
    pub deaths_consistency: Option<T>,

    /// Reported cases per million population.
    pub cases_per_million: T,

    /// Reported deaths per million population.
    pub deaths_per_million: T,

    /// Cases per million divided by density, when density is known.
    pub cases_per_km2: Option<T>,

    /// Deaths per million divided by density, when density is known.
    pub deaths_per_km2: Option<T>,

    /// Realised or projected outcome of the first cycle.
    pub outcome: Outcome<T>,
}

/// Outcome of the first cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T> {
    /// The provisional end has passed; reported totals on the end day.
    Ended {
        /// Reported cumulative cases on the end day.
        cases: i64,
        /// Reported cumulative deaths on the end day.
        deaths: i64,
        /// End date.
        date: NaiveDate,
    },

    /// The cycle is ongoing; modelled totals at the provisional end.
    Projected {
        /// Modelled cumulative cases at the end of the curve.
        cases: Option<T>,
        /// Modelled cumulative deaths at the end of the curve.
        deaths: Option<T>,
        /// Provisional end date.
        date: NaiveDate,
        /// Reported cases as a share of the sigmoid asymptote.
        cases_reported: Option<T>,
        /// Reported deaths as a share of the sigmoid asymptote.
        deaths_reported: Option<T>,
        /// Modelled cases at the end date as a share of the asymptote.
        cases_by_end: Option<T>,
        /// Modelled deaths at the end date as a share of the asymptote.
        deaths_by_end: Option<T>,
        /// Cases asymptote per million population.
        cases_per_million: Option<T>,
        /// Deaths asymptote per million population.
        deaths_per_million: Option<T>,
    },
}

// ============================================================================
// Metric Functions
// ============================================================================

/// Consistency `1 − total_error / smoothed_total`, or `None` for a zero total.
#[inline]
pub fn consistency<T: Float>(total_error: T, smoothed_total: T) -> Option<T> {
    if smoothed_total == T::zero() {
        None
    } else {
        Some(T::one() - total_error / smoothed_total)
    }
}

/// Count per million population; 0 for an empty population.
#[inline]
pub fn per_million<T: Float>(count: i64, population: u64) -> T {
    if population == 0 {
        return T::zero();
    }
    to_float::<T, _>(count) * to_float(1_000_000) / to_float(population)
}

/// Per-million rate divided by population density.
#[inline]
pub fn per_area<T: Float>(rate: T, density: Option<f64>) -> Option<T> {
    let density: T = to_float(density?);
    if density > T::zero() {
        Some(rate / density)
    } else {
        None
    }
}

/// Modelled total per million population; 0 for an empty population.
#[inline]
pub fn projected_per_million<T: Float>(total: T, population: u64) -> T {
    if population == 0 {
        return T::zero();
    }
    total * to_float(1_000_000) / to_float(population)
}

/// Share of a projected total already reported.
#[inline]
pub fn reported_share<T: Float>(reported: i64, projected: T) -> Option<T> {
    modelled_share(to_float(reported), projected)
}

/// Share of a projected total covered by `part`, or `None` for a non-positive total.
#[inline]
pub fn modelled_share<T: Float>(part: T, projected: T) -> Option<T> {
    if projected > T::zero() {
        Some(part / projected)
    } else {
        None
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn percent<T: Float>(value: Option<T>) -> f64 {
    value.and_then(|v| v.to_f64()).map_or(f64::NAN, |v| v * 100.0)
}

impl<T: Float> Display for Outcome<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Ended { cases, deaths, date } => write!(
                f,
                "{cases} total cases, {deaths} total deaths at end of {date} (first wave ended)"
            ),
            Self::Projected {
                cases,
                deaths,
                date,
                cases_reported,
                deaths_reported,
                cases_by_end,
                deaths_by_end,
                cases_per_million,
                deaths_per_million,
            } => {
                let total = |v: &Option<T>| v.and_then(|v| v.to_f64()).unwrap_or(0.0);
                writeln!(
                    f,
                    "{:.0} total cases, {:.0} total deaths by end of {date}",
                    total(cases),
                    total(deaths)
                )?;
                writeln!(
                    f,
                    "  {:.1}% of predicted cases and {:.1}% of predicted deaths reported to date",
                    percent(*cases_reported),
                    percent(*deaths_reported)
                )?;
                writeln!(
                    f,
                    "  {:.1}% of predicted cases and {:.1}% of predicted deaths reported by end date",
                    percent(*cases_by_end),
                    percent(*deaths_by_end)
                )?;
                write!(
                    f,
                    "  {:.0} cases per million, {:.0} deaths per million predicted",
                    total(cases_per_million),
                    total(deaths_per_million)
                )
            }
        }
    }
}

impl<T: Float> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(
            f,
            "  {:.0} cases per million, {:.0} deaths per million",
            self.cases_per_million.to_f64().unwrap_or(0.0),
            self.deaths_per_million.to_f64().unwrap_or(0.0)
        )?;
        if let (Some(c), Some(d)) = (self.cases_per_km2, self.deaths_per_km2) {
            writeln!(
                f,
                "  {:.1} cases km2, {:.1} deaths km2",
                c.to_f64().unwrap_or(0.0),
                d.to_f64().unwrap_or(0.0)
            )?;
        }
        if self.cases_consistency.is_some() {
            writeln!(f, "  Consistency (cases):  {:5.1}%", percent(self.cases_consistency))?;
        }
        if self.deaths_consistency.is_some() {
            writeln!(f, "  Consistency (deaths): {:5.1}%", percent(self.deaths_consistency))?;
        }
        write!(f, "Outcome: {}", self.outcome)
    }
}
