//! Tests for the prelude module.
//!
//! These tests verify that the prelude is a one-stop import for configuring
//! an analysis and reading its results.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Workflow** - A complete analysis with prelude imports only

use chrono::{Duration, NaiveDate};

use epicurve::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that rescale anchors are available.
///
/// Verifies that both anchor variants are exported unqualified.
#[test]
fn test_prelude_rescale_anchor() {
    let _ = Epicurve::<f64>::new().rescale_anchor(LatestDay);
    let _ = Epicurve::<f64>::new().rescale_anchor(EndOrLatest);
}

/// Test that configuration types are available.
///
/// Verifies that the config and calibrated types can be named.
#[test]
fn test_prelude_types() {
    let config: EpicurveConfig<f64> = EpicurveConfig::default();
    assert_eq!(config.dilation_for(Metric::Deaths), 2.0);

    let lag: Calibrated<isize> = Calibrated::Default(6);
    assert_eq!(lag.value(), 6);
    assert!(!lag.is_observed());
    assert_eq!(lag.to_string(), "6 (expected)");
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a complete analysis.
///
/// Verifies that a prelude-only workflow runs and prints a summary.
#[test]
fn test_prelude_workflow() {
    let first = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
    let records = DailyRecord::<f64>::series_from_counts((0..70).map(|i| {
        let cases = 400 - (i - 35) * (i - 35) / 4;
        (first + Duration::days(i), cases.max(0), cases.max(0) / 30)
    }));

    let model: RegionModel<f64> = Epicurve::new()
        .smoothing_window(7)
        .build()
        .unwrap()
        .analyse(Region::new("PL", "Preludia", 2_000_000), records)
        .unwrap();

    let summary = model.to_string();
    assert!(summary.contains("Preludia"));

    let forecast: Forecast<f64> = model.forecast(0);
    let _rows: &[ForecastRow<f64>] = forecast.rows();
    let _milestones: &Milestones<f64> = &model.milestones;
    let _smoothing: &SmoothingSummary<f64> = &model.smoothing;
    let _timeline: &Timeline = &model.timeline;
    let _warnings: &[FitWarning] = &model.warnings;
}
