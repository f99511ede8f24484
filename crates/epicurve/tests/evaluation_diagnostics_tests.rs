#![cfg(feature = "dev")]
//! Tests for diagnostic measures and forecast horizons.
//!
//! ## Test Organization
//!
//! 1. **Consistency** - Fit error relative to totals
//! 2. **Rates** - Per-million and per-area figures
//! 3. **Outcome** - Projected outcome report lines
//! 4. **Horizons** - Default horizon resolution

use approx::assert_relative_eq;
use chrono::NaiveDate;

use epicurve::internals::evaluation::diagnostics::{
    Outcome, consistency, modelled_share, per_area, per_million, projected_per_million,
    reported_share,
};
use epicurve::internals::evaluation::prediction::resolve_horizon;

// ============================================================================
// Consistency Tests
// ============================================================================

/// Test consistency values.
///
/// Verifies 1 − error / total and the zero-total case.
#[test]
fn test_consistency() {
    assert_relative_eq!(consistency(50.0f64, 1000.0).unwrap(), 0.95, epsilon = 1e-12);
    assert_relative_eq!(consistency(0.0f64, 1000.0).unwrap(), 1.0, epsilon = 1e-12);
    assert!(consistency(5.0f64, 0.0).is_none());
}

/// Test reported share.
///
/// Verifies the share of a projected total already reported.
#[test]
fn test_reported_share() {
    assert_relative_eq!(reported_share(250, 1000.0f64).unwrap(), 0.25, epsilon = 1e-12);
    assert!(reported_share(250, 0.0f64).is_none());
}

/// Test modelled share.
///
/// Verifies the share of the asymptote a modelled total covers.
#[test]
fn test_modelled_share() {
    assert_relative_eq!(modelled_share(960.0f64, 1200.0).unwrap(), 0.8, epsilon = 1e-12);
    assert!(modelled_share(960.0f64, 0.0).is_none());
    assert!(modelled_share(960.0f64, -1.0).is_none());
}

// ============================================================================
// Rate Tests
// ============================================================================

/// Test per-million rates.
///
/// Verifies scaling and the empty-population fallback.
#[test]
fn test_per_million() {
    let rate: f64 = per_million(1_500, 3_000_000);
    assert_relative_eq!(rate, 500.0, epsilon = 1e-9);

    let rate: f64 = per_million(1_500, 0);
    assert_relative_eq!(rate, 0.0, epsilon = 1e-12);
}

/// Test per-area rates.
///
/// Verifies division by density and missing densities.
#[test]
fn test_per_area() {
    assert_relative_eq!(per_area(500.0f64, Some(250.0)).unwrap(), 2.0, epsilon = 1e-12);
    assert!(per_area(500.0f64, None).is_none());
    assert!(per_area(500.0f64, Some(0.0)).is_none());
}

/// Test per-million rates of a modelled total.
///
/// Verifies fractional totals are kept and the empty-population fallback.
#[test]
fn test_projected_per_million() {
    assert_relative_eq!(projected_per_million(1_234.5f64, 2_000_000), 617.25, epsilon = 1e-9);
    assert_relative_eq!(projected_per_million(1_234.5f64, 0), 0.0, epsilon = 1e-12);
}

// ============================================================================
// Outcome Tests
// ============================================================================

/// Test the projected outcome report.
///
/// Verifies the reported-to-date, reported-by-end-date and per-million lines.
#[test]
fn test_projected_outcome_display() {
    let outcome = Outcome::Projected {
        cases: Some(960.0f64),
        deaths: None,
        date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
        cases_reported: Some(0.5),
        deaths_reported: None,
        cases_by_end: Some(0.8),
        deaths_by_end: None,
        cases_per_million: Some(240.0),
        deaths_per_million: None,
    };
    let text = outcome.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "960 total cases, 0 total deaths by end of 2020-05-01");
    assert!(lines[1].contains("50.0% of predicted cases"));
    assert!(lines[1].ends_with("reported to date"));
    assert!(lines[2].contains("80.0% of predicted cases"));
    assert!(lines[2].ends_with("reported by end date"));
    assert_eq!(lines[3], "  240 cases per million, 0 deaths per million predicted");
}

// ============================================================================
// Horizon Tests
// ============================================================================

/// Test horizon resolution.
///
/// Verifies that 0 becomes window / 2 + 1 and explicit values are kept.
#[test]
fn test_resolve_horizon() {
    assert_eq!(resolve_horizon(0, 9), 5);
    assert_eq!(resolve_horizon(0, 1), 1);
    assert_eq!(resolve_horizon(3, 9), 3);
}
