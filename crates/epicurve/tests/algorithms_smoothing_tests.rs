#![cfg(feature = "dev")]
//! Tests for the centred moving-average smoother.
//!
//! ## Test Organization
//!
//! 1. **Window Coverage** - Which records receive values
//! 2. **Rescaling** - Smoothed totals match reported totals
//! 3. **Edge Cases** - Zero counts and short series

use approx::assert_relative_eq;
use chrono::NaiveDate;

use epicurve::internals::algorithms::smoothing::smooth_series;
use epicurve::internals::primitives::record::DailyRecord;
use epicurve::internals::primitives::window::Window;

fn series(cases: &[i64], deaths: &[i64]) -> Vec<DailyRecord<f64>> {
    let first = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
    DailyRecord::series_from_counts(
        cases
            .iter()
            .zip(deaths)
            .enumerate()
            .map(|(i, (&c, &d))| (first + chrono::Duration::days(i as i64), c, d)),
    )
}

// ============================================================================
// Window Coverage Tests
// ============================================================================

/// Test odd-width coercion.
///
/// Verifies that even widths grow by one day.
#[test]
fn test_coerce_width() {
    assert_eq!(Window::coerce_width(1), 1);
    assert_eq!(Window::coerce_width(4), 5);
    assert_eq!(Window::coerce_width(9), 9);
    assert_eq!(Window::half_width(10), 5);
}

/// Test the smoothed range.
///
/// Verifies that the first and last half-window records stay unsmoothed.
#[test]
fn test_edges_unsmoothed() {
    let cases: Vec<i64> = (0..20).map(|i| i * 3).collect();
    let deaths = vec![1; 20];
    let mut records = series(&cases, &deaths);

    let summary = smooth_series(&mut records, 5);

    assert_eq!(summary.window, 5);
    assert_eq!(summary.first_smoothed, Some(2));
    assert_eq!(summary.last_smoothed, Some(17));
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.is_smoothed(), (2..=17).contains(&i), "record {i}");
        assert_eq!(record.smoothed_cases_to_date.is_some(), record.is_smoothed());
    }
}

/// Test an even window.
///
/// Verifies that a width of 4 behaves as a width of 5.
#[test]
fn test_even_window_matches_odd() {
    let cases: Vec<i64> = (0..15).map(|i| (i * 7) % 11).collect();
    let deaths: Vec<i64> = (0..15).map(|i| i % 3).collect();
    let mut even = series(&cases, &deaths);
    let mut odd = even.clone();

    smooth_series(&mut even, 4);
    smooth_series(&mut odd, 5);

    assert_eq!(even, odd);
}

// ============================================================================
// Rescaling Tests
// ============================================================================

/// Test the total invariant.
///
/// Verifies that smoothed cumulative totals equal reported totals on the last
/// smoothed day.
#[test]
fn test_totals_match_reported() {
    let cases = [0, 5, 2, 40, 13, 80, 55, 120, 64, 200, 90, 150, 300, 10, 220, 180];
    let deaths = [0, 0, 1, 0, 2, 3, 1, 5, 2, 4, 7, 6, 3, 9, 4, 8];
    let mut records = series(&cases, &deaths);

    let summary = smooth_series(&mut records, 7);
    let last = summary.last_smoothed.unwrap();

    let case_sum: f64 = records.iter().filter_map(|r| r.smoothed_cases).sum();
    let death_sum: f64 = records.iter().filter_map(|r| r.smoothed_deaths).sum();
    let reported = &records[last];

    assert_relative_eq!(case_sum, reported.cases_to_date as f64, max_relative = 1e-9);
    assert_relative_eq!(death_sum, reported.deaths_to_date as f64, max_relative = 1e-9);
    assert_relative_eq!(summary.cases_total, reported.cases_to_date as f64, max_relative = 1e-9);
    assert_relative_eq!(
        reported.smoothed_deaths_to_date.unwrap(),
        reported.deaths_to_date as f64,
        max_relative = 1e-9
    );
}

/// Test a width-one window.
///
/// Verifies that a single-day window reproduces the raw counts.
#[test]
fn test_unit_window_is_identity() {
    let cases = [3, 9, 1, 0, 12];
    let deaths = [0, 1, 0, 2, 1];
    let mut records = series(&cases, &deaths);

    let summary = smooth_series(&mut records, 1);

    assert_relative_eq!(summary.cases_rescale, 1.0, epsilon = 1e-12);
    for (record, &raw) in records.iter().zip(&cases) {
        assert_relative_eq!(record.smoothed_cases.unwrap(), raw as f64, epsilon = 1e-12);
    }
}

/// Test a second smoothing pass.
///
/// Verifies that smoothing reads raw counts, so repeating it changes nothing.
#[test]
fn test_repeat_pass_reads_raw_counts() {
    let cases: Vec<i64> = (0..12).map(|i| (i * i) % 17).collect();
    let deaths = vec![2; 12];
    let mut records = series(&cases, &deaths);

    smooth_series(&mut records, 3);
    let first = records.clone();
    smooth_series(&mut records, 3);

    assert_eq!(records, first);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test an all-zero series.
///
/// Verifies that the rescale factor falls back to 1.
#[test]
fn test_zero_counts() {
    let mut records = series(&[0; 10], &[0; 10]);

    let summary = smooth_series(&mut records, 3);

    assert_relative_eq!(summary.cases_rescale, 1.0, epsilon = 1e-12);
    assert_relative_eq!(summary.deaths_total, 0.0, epsilon = 1e-12);
    assert!(records[1..9].iter().all(|r| r.smoothed_cases == Some(0.0)));
}

/// Test a series shorter than the window.
///
/// Verifies that nothing is smoothed.
#[test]
fn test_series_shorter_than_window() {
    let mut records = series(&[1, 2, 3], &[0, 0, 0]);

    let summary = smooth_series(&mut records, 9);

    assert!(!summary.has_smoothed());
    assert!(records.iter().all(|r| !r.is_smoothed()));
}
