//! Tests for count inputs and region series construction.
//!
//! ## Test Organization
//!
//! 1. **Input Types** - Slices, vectors and ndarray
//! 2. **Series Construction** - Dates, totals and length checks
//! 3. **Analysis from Counts** - End-to-end from raw arrays

use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use ndarray::{Array1, s};

use fastEpicurve::prelude::*;

fn first_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, 1).unwrap()
}

fn region() -> Region {
    Region::new("AR", "Arrayland", 3_000_000)
}

// ============================================================================
// Input Type Tests
// ============================================================================

/// Test slice and vector inputs.
///
/// Verifies that both expose their elements unchanged.
#[test]
fn test_slice_and_vec_inputs() {
    let counts = vec![1i64, 2, 3];
    assert_eq!(counts.as_count_slice().unwrap(), &[1, 2, 3]);
    assert_eq!(counts[..2].as_count_slice().unwrap(), &[1, 2]);
}

/// Test contiguous ndarray input.
///
/// Verifies zero-copy access to a standard-layout array.
#[test]
fn test_ndarray_input() {
    let counts = Array1::from(vec![4i64, 5, 6]);
    assert_eq!(counts.as_count_slice().unwrap(), &[4, 5, 6]);
}

/// Test non-contiguous ndarray input.
///
/// Verifies that a strided view is rejected.
#[test]
fn test_non_contiguous_ndarray_rejected() {
    let counts = Array1::from(vec![1i64, 2, 3, 4, 5, 6]);
    let strided = counts.slice(s![..;2]);

    let err = strided.as_count_slice().unwrap_err();
    assert!(matches!(err, EpicurveError::InvalidInput(_)));
}

// ============================================================================
// Series Construction Tests
// ============================================================================

/// Test dates and cumulative totals.
///
/// Verifies consecutive dates from the first date and running totals.
#[test]
fn test_from_counts_builds_totals() {
    let series =
        RegionSeries::<f64>::from_counts(region(), first_date(), &[5i64, 0, 7][..], &[0i64, 1, 1][..])
            .unwrap();

    assert_eq!(series.records.len(), 3);
    assert_eq!(series.records[2].date, first_date() + Duration::days(2));
    assert_eq!(series.records[2].cases_to_date, 12);
    assert_eq!(series.records[2].deaths_to_date, 2);
    assert!(series.records.iter().all(|r| !r.is_smoothed()));
}

/// Test mismatched lengths.
///
/// Verifies that cases and deaths must cover the same days.
#[test]
fn test_length_mismatch_rejected() {
    let err = RegionSeries::<f64>::from_counts(region(), first_date(), &vec![1i64, 2, 3], &vec![0i64, 0])
        .unwrap_err();
    assert!(matches!(err, EpicurveError::InvalidInput(_)));
}

// ============================================================================
// Analysis from Counts Tests
// ============================================================================

/// Test analysis straight from arrays.
///
/// Verifies that ndarray counts produce a model with totals matching the input.
#[test]
fn test_analyse_counts_from_ndarray() {
    let cases: Array1<i64> = (0..80i64).map(|i| 20 + 30 * i - i * i / 3).map(|c| c.max(0)).collect();
    let deaths: Array1<i64> = cases.iter().map(|c| c / 40).collect();

    let model = ParallelEpicurve::<f64>::new()
        .smoothing_window(7)
        .build()
        .unwrap()
        .analyse_counts(region(), first_date(), &cases, &deaths)
        .unwrap();

    let last = model.smoothing.last_smoothed.unwrap();
    assert_eq!(last, 76);
    assert_relative_eq!(
        model.smoothing.cases_total,
        model.records[last].cases_to_date as f64,
        max_relative = 1e-9
    );
    assert!(model.milestones.data_sufficient);
}
