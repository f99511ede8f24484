//! Input abstractions for multi-region analysis.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for daily count inputs, allowing
//! a region's series to be built from several data formats (slices, vectors,
//! ndarray) through a single interface, and the [`RegionSeries`] unit that the
//! parallel executor fans out over.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with `ndarray`.
//! * **Fail-fast validation**: Rejects non-contiguous arrays and mismatched lengths.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container.
//! * Cases and deaths inputs for one region have the same length.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.

// External dependencies
use chrono::{Duration, NaiveDate};
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from epicurve crate
use epicurve::internals::primitives::errors::EpicurveError;
use epicurve::internals::primitives::record::{DailyRecord, Region};

/// Trait for types that can supply a region's daily counts.
pub trait CountInput {
    /// Convert the input to a contiguous slice.
    fn as_count_slice(&self) -> Result<&[i64], EpicurveError>;
}

impl CountInput for [i64] {
    fn as_count_slice(&self) -> Result<&[i64], EpicurveError> {
        Ok(self)
    }
}

impl CountInput for Vec<i64> {
    fn as_count_slice(&self) -> Result<&[i64], EpicurveError> {
        Ok(self.as_slice())
    }
}

impl<S> CountInput for ArrayBase<S, Ix1>
where
    S: Data<Elem = i64>,
{
    fn as_count_slice(&self) -> Result<&[i64], EpicurveError> {
        self.as_slice().ok_or_else(|| {
            EpicurveError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// One region and its daily series, ready for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries<T> {
    /// Region identity.
    pub region: Region,

    /// Daily records in ascending date order.
    pub records: Vec<DailyRecord<T>>,
}

impl<T> RegionSeries<T> {
    /// Pair a region with an already-built series.
    pub fn new(region: Region, records: Vec<DailyRecord<T>>) -> Self {
        Self { region, records }
    }

    /// Build a series from consecutive daily counts starting on `first_date`.
    pub fn from_counts<C, D>(
        region: Region,
        first_date: NaiveDate,
        cases: &C,
        deaths: &D,
    ) -> Result<Self, EpicurveError>
    where
        C: CountInput + ?Sized,
        D: CountInput + ?Sized,
    {
        let cases = cases.as_count_slice()?;
        let deaths = deaths.as_count_slice()?;
        if cases.len() != deaths.len() {
            return Err(EpicurveError::InvalidInput(format!(
                "cases and deaths must have the same length (got {} and {})",
                cases.len(),
                deaths.len()
            )));
        }

        let records = DailyRecord::series_from_counts(
            cases
                .iter()
                .zip(deaths)
                .enumerate()
                .map(|(i, (&c, &d))| (first_date + Duration::days(i as i64), c, d)),
        );
        Ok(Self::new(region, records))
    }
}
