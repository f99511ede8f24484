//! Daily records and region identity.
//!
//! A region's history is an ordered sequence of [`DailyRecord`]s. The loader
//! fills in the raw counts and cumulative totals; the smoothing engine and
//! milestone detector then populate the optional decoration fields. Fields
//! are only ever added, never cleared.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use chrono::NaiveDate;

// ============================================================================
// Daily Record
// ============================================================================

/// One day of reported data for a region.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord<T> {
    /// Report date.
    pub date: NaiveDate,

    /// New cases reported on this date (may be negative after corrections).
    pub raw_cases: i64,

    /// New deaths reported on this date (may be negative after corrections).
    pub raw_deaths: i64,

    /// Cumulative reported cases up to and including this date.
    pub cases_to_date: i64,

    /// Cumulative reported deaths up to and including this date.
    pub deaths_to_date: i64,

    /// Centred moving average of new cases, rescaled to actual totals.
    pub smoothed_cases: Option<T>,

    /// Centred moving average of new deaths, rescaled to actual totals.
    pub smoothed_deaths: Option<T>,

    /// Running sum of `smoothed_cases`.
    pub smoothed_cases_to_date: Option<T>,

    /// Running sum of `smoothed_deaths`.
    pub smoothed_deaths_to_date: Option<T>,

    /// Ratio of smoothed new cases to those `spread` days earlier.
    pub infection_rate: Option<T>,
}

impl<T> DailyRecord<T> {
    /// Create an undecorated record from raw counts and cumulative totals.
    pub fn new(
        date: NaiveDate,
        raw_cases: i64,
        raw_deaths: i64,
        cases_to_date: i64,
        deaths_to_date: i64,
    ) -> Self {
        Self {
            date,
            raw_cases,
            raw_deaths,
            cases_to_date,
            deaths_to_date,
            smoothed_cases: None,
            smoothed_deaths: None,
            smoothed_cases_to_date: None,
            smoothed_deaths_to_date: None,
            infection_rate: None,
        }
    }

    /// Build a series from `(date, new_cases, new_deaths)` triples, computing
    /// cumulative totals in input order.
    pub fn series_from_counts<I>(days: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (NaiveDate, i64, i64)>,
    {
        let mut cases_to_date = 0i64;
        let mut deaths_to_date = 0i64;
        days.into_iter()
            .map(|(date, cases, deaths)| {
                cases_to_date += cases;
                deaths_to_date += deaths;
                Self::new(date, cases, deaths, cases_to_date, deaths_to_date)
            })
            .collect()
    }

    /// Whether the smoothing engine produced a value for this day.
    #[inline]
    pub fn is_smoothed(&self) -> bool {
        self.smoothed_cases.is_some()
    }
}

// ============================================================================
// Region
// ============================================================================

/// Identity of the geographic region being analysed.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Short region code (e.g. "UK").
    pub code: String,

    /// Display name.
    pub name: String,

    /// Resident population.
    pub population: u64,

    /// Population density in people per km², when known.
    pub density: Option<f64>,
}

impl Region {
    /// Create a region without density information.
    pub fn new(code: impl Into<String>, name: impl Into<String>, population: u64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            population,
            density: None,
        }
    }

    /// Attach a population density.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }
}

// ============================================================================
// Metric
// ============================================================================

/// Which of the two tracked series a stage operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// New and cumulative cases.
    Cases,

    /// New and cumulative deaths; fitted on a clock shifted by the lag.
    Deaths,
}

impl Metric {
    /// Smoothed new count of this metric on a record.
    #[inline]
    pub fn smoothed<T: Copy>(&self, record: &DailyRecord<T>) -> Option<T> {
        match self {
            Self::Cases => record.smoothed_cases,
            Self::Deaths => record.smoothed_deaths,
        }
    }

    /// Smoothed cumulative count of this metric on a record.
    #[inline]
    pub fn smoothed_to_date<T: Copy>(&self, record: &DailyRecord<T>) -> Option<T> {
        match self {
            Self::Cases => record.smoothed_cases_to_date,
            Self::Deaths => record.smoothed_deaths_to_date,
        }
    }

    /// Reported cumulative count of this metric on a record.
    #[inline]
    pub fn to_date<T>(&self, record: &DailyRecord<T>) -> i64 {
        match self {
            Self::Cases => record.cases_to_date,
            Self::Deaths => record.deaths_to_date,
        }
    }

    /// Lower-case label used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cases => "cases",
            Self::Deaths => "deaths",
        }
    }
}
