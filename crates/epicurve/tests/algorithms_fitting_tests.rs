#![cfg(feature = "dev")]
//! Tests for bell-curve fitting and curve generation.
//!
//! These tests drive the fitter with points sampled from a known bell curve,
//! then check the generated bell and sigmoid curves:
//! - Scale and shape recovery
//! - Error measures over the fitting window
//! - Rescaling to the anchor total
//! - Monotone cumulative curves and infection rates
//!
//! ## Test Organization
//!
//! 1. **Fit Target** - Error measures
//! 2. **Fitting** - Parameter recovery and convergence
//! 3. **Curve Generation** - Rescaling, monotonicity, lookups

use approx::{assert_abs_diff_eq, assert_relative_eq};

use epicurve::internals::algorithms::curves::{CurveSpan, generate_curve};
use epicurve::internals::algorithms::fitting::{
    FitTarget, FitWarning, MAX_FIT_ROUNDS, MIN_FIT_TOTAL, fit_curve, has_enough_data,
};
use epicurve::internals::math::logistic::{bell_amplitude, bell_scale};
use epicurve::internals::math::transform::CycleTransform;
use epicurve::internals::primitives::record::Metric;

// Bell with L = 1000, r = 6 over a 40-day cycle starting on day 0.
fn exact_target() -> FitTarget<f64> {
    let transform = CycleTransform::new(0, 40, 0, 1.0);
    let points = (0..=40)
        .map(|day| {
            let t = transform.t(day);
            (t, bell_amplitude(1000.0, 6.0, t))
        })
        .collect();
    FitTarget {
        metric: Metric::Cases,
        transform,
        anchor_day: 20,
        anchor_value: 250.0,
        points,
    }
}

// ============================================================================
// Fit Target Tests
// ============================================================================

/// Test error measures on exact data.
///
/// Verifies zero error for the generating parameters.
#[test]
fn test_errors_zero_for_exact_parameters() {
    let target = exact_target();
    assert_abs_diff_eq!(target.total_absolute_error(1000.0, 6.0).unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(target.mean_absolute_error(1000.0, 6.0).unwrap(), 0.0, epsilon = 1e-9);
}

/// Test mean against total error.
///
/// Verifies that the mean divides the total by the point count.
#[test]
fn test_mean_error_is_total_over_points() {
    let target = exact_target();
    let total = target.total_absolute_error(900.0, 5.0).unwrap();
    let mean = target.mean_absolute_error(900.0, 5.0).unwrap();
    assert_relative_eq!(mean, total / 41.0, max_relative = 1e-12);
}

/// Test an empty fitting window.
///
/// Verifies that no error is reported without points.
#[test]
fn test_empty_window_has_no_error() {
    let mut target = exact_target();
    target.points.clear();
    assert!(target.total_absolute_error(1000.0, 6.0).is_none());
    assert!(target.mean_absolute_error(1000.0, 6.0).is_none());
}

/// Test the minimum-data gate.
///
/// Verifies the threshold below which a metric is not fitted.
#[test]
fn test_has_enough_data() {
    assert!(has_enough_data(MIN_FIT_TOTAL));
    assert!(has_enough_data(1.0e6f64));
    assert!(!has_enough_data(49.9f64));
}

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test parameter recovery.
///
/// Verifies that exact bell data yields its scale and shape without warnings.
#[test]
fn test_fit_recovers_parameters() {
    let target = exact_target();
    let fit = fit_curve(&target, 6.0);

    assert_relative_eq!(fit.scale, 1000.0, max_relative = 1e-9);
    assert_abs_diff_eq!(fit.shape, 6.0, epsilon = 1e-9);
    assert!(fit.converged());
    assert_eq!(fit.anchor_day, 20);
    assert_relative_eq!(fit.amplitude_at(20), 250.0, max_relative = 1e-9);
}

/// Test recovery from a different starting shape.
///
/// Verifies that the shape search moves towards the generating shape.
#[test]
fn test_fit_from_other_start() {
    let target = exact_target();
    let fit = fit_curve(&target, 4.5);

    assert_abs_diff_eq!(fit.shape, 6.0, epsilon = 0.02);
    assert!(fit.rounds >= 1);
}

/// Test the round cap.
///
/// Verifies that three scattered points anchored off-peak keep moving the
/// shape every round, so the fit stops after the cap with a scale warning and
/// keeps the values of its last round.
#[test]
fn test_fit_round_cap_keeps_last_values() {
    let transform = CycleTransform::new(0, 40, 0, 1.0);
    let target = FitTarget {
        metric: Metric::Cases,
        transform,
        anchor_day: 29,
        anchor_value: 800.0,
        points: vec![
            (transform.t(8), 300.0),
            (transform.t(35), 100.0),
            (transform.t(36), 150.0),
        ],
    };
    let fit = fit_curve(&target, 6.0);

    assert_eq!(fit.rounds, MAX_FIT_ROUNDS);
    assert_eq!(
        fit.warnings,
        vec![FitWarning::ScaleNotConverged {
            metric: Metric::Cases
        }]
    );
    assert!(!fit.converged());

    // The last round solves L from the shape the ninth round left behind.
    assert_abs_diff_eq!(fit.shape, 6.890625, epsilon = 1e-12);
    assert_relative_eq!(fit.scale, bell_scale(800.0, 6.875, transform.t(29)), max_relative = 1e-12);
    assert_relative_eq!(fit.scale, 19_283.98, max_relative = 1e-6);
}

// ============================================================================
// Curve Generation Tests
// ============================================================================

fn span(anchor_day: isize, anchor_total: f64) -> CurveSpan<f64> {
    CurveSpan {
        first_day: 0,
        last_day: 60,
        end_day: 40,
        anchor_day,
        anchor_total,
    }
}

/// Test rescaling to the anchor.
///
/// Verifies that the cumulative curve hits the anchor total exactly.
#[test]
fn test_curve_matches_anchor_total() {
    let fit = fit_curve(&exact_target(), 6.0);
    let curve = generate_curve(&fit, span(30, 5000.0), 7);

    let (_, total) = curve.at(30).unwrap();
    assert_relative_eq!(total, 5000.0, max_relative = 1e-9);
    assert_eq!(curve.len(), 61);
    assert_eq!(curve.last_day(), 60);
    assert_relative_eq!(curve.final_total(), *curve.sigmoid.last().unwrap(), epsilon = 1e-12);
}

/// Test cumulative monotonicity.
///
/// Verifies that the sigmoid never decreases and the bell stays positive.
#[test]
fn test_sigmoid_non_decreasing() {
    let fit = fit_curve(&exact_target(), 6.0);
    let curve = generate_curve(&fit, span(20, 1200.0), 7);

    assert!(curve.bell.iter().all(|&v| v > 0.0));
    assert!(curve.sigmoid.windows(2).all(|w| w[1] >= w[0]));
    assert!(curve.asymptote >= curve.final_total() * 0.5);
}

/// Test day lookups outside the span.
///
/// Verifies that days before or after the curve return nothing.
#[test]
fn test_curve_lookup_bounds() {
    let fit = fit_curve(&exact_target(), 6.0);
    let curve = generate_curve(&fit, span(20, 1200.0), 7);

    assert!(curve.at(-1).is_none());
    assert!(curve.at(61).is_none());
    assert!(curve.at(0).is_some());
}

/// Test modelled infection rates.
///
/// Verifies the lookback gap and a rate above 1 before the peak.
#[test]
fn test_curve_infection_rates() {
    let fit = fit_curve(&exact_target(), 6.0);
    let curve = generate_curve(&fit, span(20, 1200.0), 7);

    assert!(curve.infection[..7].iter().all(Option::is_none));
    assert!(curve.infection[10].unwrap() > 1.0);
    assert!(curve.infection[50].unwrap() < 1.0);
}

/// Test a zero anchor total.
///
/// Verifies that the curve collapses to zero rather than failing.
#[test]
fn test_curve_zero_anchor() {
    let fit = fit_curve(&exact_target(), 6.0);
    let curve = generate_curve(&fit, span(20, 0.0), 7);

    assert_abs_diff_eq!(curve.final_total(), 0.0, epsilon = 1e-12);
}
