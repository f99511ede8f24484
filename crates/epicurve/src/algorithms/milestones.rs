//! Milestone detection over a smoothed series.
//!
//! ## Purpose
//!
//! This module scans the smoothed series once, in index order, to find the
//! structurally significant days of the outbreak: the start, day zero, the
//! case peak and death peak, and a provisional end. It also decorates each
//! record with the infection rate and derives the cycle length and the
//! position of the latest data within the cycle.
//!
//! ## Design notes
//!
//! * **Never fails**: Every milestone has a fallback derived from configuration.
//! * **Calibration**: Growth days and lag start as configured defaults and are
//!   replaced by observed intervals only when the observed peak is accepted.
//! * **Relative days**: All days are relative to the latest report (day 0).
//!
//! ## Key concepts
//!
//! * **Start**: First day smoothed cumulative cases reach 50.
//! * **Day zero**: First day smoothed cumulative deaths reach 50.
//! * **Peak acceptance**: A peak on or after the latest smoothed day that came
//!   sooner than expected is treated as still rising and replaced.
//! * **Cycle**: `2 × (peak − start)`, the symmetric rise-and-fall length.
//!
//! ## Invariants
//!
//! * `start < peak_cases <= end`.
//! * `cycle == 2 × (peak_cases − start)` and `cycle >= 2`.
//!
//! ## Non-goals
//!
//! * This module does not fit curves.
//! * This module does not detect second waves; the death scan stops at the end.

// External dependencies
use chrono::NaiveDate;
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::{decay_factor, to_float};
use crate::math::transform::CycleTransform;
use crate::primitives::calibrated::Calibrated;
use crate::primitives::record::DailyRecord;
use crate::primitives::timeline::Timeline;

// ============================================================================
// Thresholds
// ============================================================================

/// Smoothed cumulative count that marks the start (cases) or day zero (deaths).
pub const ONSET_THRESHOLD: f64 = 50.0;

/// Smoothed cumulative cases required before infection rates are computed.
pub const INFECTION_THRESHOLD: f64 = 500.0;

// ============================================================================
// Types
// ============================================================================

/// Parameters consumed by the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorParams<T> {
    /// Expected days from start to peak cases.
    pub growth_days: usize,

    /// Expected days from peak cases to peak deaths.
    pub lag_days: usize,

    /// Infection-rate lookback in days.
    pub spread_days: usize,

    /// Post-peak stretch for cases.
    pub dilation_cases: T,

    /// Upper bound on the end-day decay factor.
    pub dilation_clip: T,
}

/// A relative day with its calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    /// Day relative to the latest report (0 = latest, negative = past).
    pub day: isize,

    /// Calendar date of the day.
    pub date: NaiveDate,
}

impl Milestone {
    /// Create a milestone for `day` on `timeline`.
    #[inline]
    pub fn on(timeline: &Timeline, day: isize) -> Self {
        Self {
            day,
            date: timeline.date_of(day),
        }
    }
}

/// An infection-rate observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfectionPoint<T> {
    /// Ratio of smoothed new cases to those `spread` days earlier.
    pub rate: T,

    /// Day of the observation.
    pub at: Milestone,
}

/// Milestones and derived cycle quantities for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestones<T> {
    /// First day smoothed cumulative cases reach 50.
    pub start: Milestone,

    /// First day smoothed cumulative deaths reach 50, if ever.
    pub day_zero: Option<Milestone>,

    /// Accepted (or projected) peak of new cases.
    pub peak_cases: Milestone,

    /// Accepted (or projected) peak of new deaths.
    pub peak_deaths: Milestone,

    /// Provisional end of the first cycle.
    pub end: Milestone,

    /// Latest day with a smoothed value.
    pub latest: Milestone,

    /// Symmetric cycle length in days.
    pub cycle: isize,

    /// Fraction of the way from start to end at the latest smoothed day.
    pub position: T,

    /// Start-to-peak interval.
    pub growth_days: Calibrated<usize>,

    /// Peak-cases-to-peak-deaths interval.
    pub lag_days: Calibrated<isize>,

    /// Highest infection rate seen.
    pub infection_peak: Option<InfectionPoint<T>>,

    /// Most recent infection rate.
    pub infection_latest: Option<InfectionPoint<T>>,

    /// False when cumulative cases never reached the start threshold.
    pub data_sufficient: bool,
}

impl<T: Float> Milestones<T> {
    /// Day-to-`t` transform for the cases curve.
    pub fn cases_transform(&self, dilation: T) -> CycleTransform<T> {
        CycleTransform::new(self.start.day, self.cycle, 0, dilation)
    }

    /// Day-to-`t` transform for the deaths curve, shifted by the lag.
    pub fn deaths_transform(&self, dilation: T) -> CycleTransform<T> {
        CycleTransform::new(self.start.day, self.cycle, self.lag_days.value(), dilation)
    }

    /// Whether the provisional end lies before the latest report.
    #[inline]
    pub fn has_ended(&self) -> bool {
        self.end.day < 0
    }
}

// ============================================================================
// Detection
// ============================================================================

/// Detect milestones over a smoothed series, writing infection rates onto it.
///
/// `last_smoothed` is the index of the last record with a smoothed value.
pub fn detect_milestones<T: Float>(
    records: &mut [DailyRecord<T>],
    timeline: &Timeline,
    last_smoothed: usize,
    params: &DetectorParams<T>,
) -> Milestones<T> {
    let onset: T = to_float(ONSET_THRESHOLD);
    let infection_floor: T = to_float(INFECTION_THRESHOLD);
    let spread = params.spread_days;
    let latest_day = timeline.day_of(last_smoothed);

    let mut start_day = None;
    let mut day_zero = None;
    let mut case_peak = T::zero();
    let mut case_peak_day = None;
    let mut infection_peak: Option<InfectionPoint<T>> = None;
    let mut infection_latest = None;

    for i in 0..records.len() {
        records[i].infection_rate = None;

        let (Some(cases), Some(cases_to_date), Some(deaths_to_date)) = (
            records[i].smoothed_cases,
            records[i].smoothed_cases_to_date,
            records[i].smoothed_deaths_to_date,
        ) else {
            continue;
        };
        let day = timeline.day_of(i);

        if i >= spread && cases_to_date >= infection_floor {
            if let Some(earlier) = records[i - spread].smoothed_cases {
                if earlier != T::zero() {
                    let point = InfectionPoint {
                        rate: cases / earlier,
                        at: Milestone::on(timeline, day),
                    };
                    records[i].infection_rate = Some(point.rate);
                    infection_latest = Some(point);
                    if point.rate > infection_peak.map_or(T::zero(), |p| p.rate) {
                        infection_peak = Some(point);
                    }
                }
            }
        }

        if start_day.is_none() && cases_to_date >= onset {
            start_day = Some(day);
        }
        if day_zero.is_none() && deaths_to_date >= onset {
            day_zero = Some(day);
        }
        if cases > case_peak {
            case_peak = cases;
            case_peak_day = Some(day);
        }
    }

    let data_sufficient = start_day.is_some();
    let start = start_day.unwrap_or_else(|| {
        warn!("cumulative cases never reached {ONSET_THRESHOLD}; starting the clock at day {latest_day}");
        latest_day
    });

    // Peak cases
    let expected_growth = params.growth_days as isize;
    let (peak_cases, growth_days) = match case_peak_day {
        Some(peak) if peak > start && !(peak >= latest_day && peak - start < expected_growth) => {
            (peak, Calibrated::Observed((peak - start) as usize))
        }
        _ => (start + expected_growth, Calibrated::Default(params.growth_days)),
    };

    // Cycle and provisional end
    let cycle = 2 * (peak_cases - start);
    let decay = decay_factor(params.dilation_cases, params.dilation_clip);
    let stretched: T = to_float::<T, _>(cycle) * (T::one() + decay) / to_float(2);
    let end = start + stretched.to_isize().unwrap_or(cycle);
    let position = to_float::<T, _>(latest_day - start) / to_float(end - start);

    // Peak deaths, scanning from just before the start to avoid late second peaks
    let expected_lag = params.lag_days as isize;
    let mut death_peak = T::zero();
    let mut death_peak_day = None;
    for day in (start - expected_lag)..=latest_day {
        if day > end {
            break;
        }
        let Some(deaths) = timeline
            .index_of(day)
            .and_then(|index| records[index].smoothed_deaths)
        else {
            continue;
        };
        if deaths > death_peak {
            death_peak = deaths;
            death_peak_day = Some(day);
        }
    }

    let (peak_deaths, lag_days) = match death_peak_day {
        Some(peak)
            if !(peak >= peak_cases && peak >= latest_day && peak - peak_cases < expected_lag) =>
        {
            (peak, Calibrated::Observed(peak - peak_cases))
        }
        _ => (peak_cases + expected_lag, Calibrated::Default(expected_lag)),
    };

    let milestones = Milestones {
        start: Milestone::on(timeline, start),
        day_zero: day_zero.map(|day| Milestone::on(timeline, day)),
        peak_cases: Milestone::on(timeline, peak_cases),
        peak_deaths: Milestone::on(timeline, peak_deaths),
        end: Milestone::on(timeline, end),
        latest: Milestone::on(timeline, latest_day),
        cycle,
        position,
        growth_days,
        lag_days,
        infection_peak,
        infection_latest,
        data_sufficient,
    };

    debug!(
        "milestones: start {} peak cases {} peak deaths {} end {} (cycle {}, growth {}, lag {})",
        milestones.start.date,
        milestones.peak_cases.date,
        milestones.peak_deaths.date,
        milestones.end.date,
        cycle,
        growth_days,
        lag_days
    );

    milestones
}
