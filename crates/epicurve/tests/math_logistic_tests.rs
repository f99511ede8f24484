#![cfg(feature = "dev")]
//! Tests for logistic curve helpers and the cycle transform.
//!
//! These tests verify the closed-form pieces the fitter is built from:
//! - Bell amplitude and its inverse scale solve
//! - Sigmoid scale at the peak
//! - Day-to-`t` mapping with lag and post-peak dilation
//!
//! ## Test Organization
//!
//! 1. **Bell Curve** - Amplitude, scale, symmetry
//! 2. **Sigmoid** - Asymptote solve
//! 3. **Transform** - Start, peak, end and dilation

use approx::assert_relative_eq;

use epicurve::internals::math::logistic::{bell_amplitude, bell_scale, sigmoid_scale};
use epicurve::internals::math::transform::CycleTransform;

// ============================================================================
// Bell Curve Tests
// ============================================================================

/// Test bell height at the peak.
///
/// Verifies that A(0) = L / 4 for any shape.
#[test]
fn test_bell_amplitude_at_peak() {
    for shape in [4.0, 5.5, 8.0] {
        assert_relative_eq!(bell_amplitude(1000.0f64, shape, 0.0), 250.0, epsilon = 1e-12);
    }
}

/// Test bell symmetry.
///
/// Verifies that the bell is symmetric about t = 0.
#[test]
fn test_bell_amplitude_symmetric() {
    for t in [0.1, 0.5, 1.0, 1.7] {
        assert_relative_eq!(
            bell_amplitude(500.0f64, 6.0, t),
            bell_amplitude(500.0f64, 6.0, -t),
            epsilon = 1e-12
        );
    }
}

/// Test scale solve against amplitude.
///
/// Verifies that the solved scale reproduces the amplitude it was solved from.
#[test]
fn test_bell_scale_inverts_amplitude() {
    for shape in [4.0f64, 6.0, 8.0] {
        for t in [-1.0, -0.4, 0.0, 0.3, 0.9] {
            let amplitude = bell_amplitude(1234.0, shape, t);
            assert_relative_eq!(bell_scale(amplitude, shape, t), 1234.0, max_relative = 1e-9);
        }
    }
}

// ============================================================================
// Sigmoid Tests
// ============================================================================

/// Test sigmoid scale at the peak.
///
/// Verifies that half the asymptote is reached at t = 0.
#[test]
fn test_sigmoid_scale_at_peak() {
    assert_relative_eq!(sigmoid_scale(400.0f64, 6.0, 0.0), 800.0, epsilon = 1e-12);
}

/// Test sigmoid scale late in the cycle.
///
/// Verifies that the asymptote barely exceeds a late cumulative total.
#[test]
fn test_sigmoid_scale_late() {
    let asymptote = sigmoid_scale(1000.0f64, 8.0, 1.0);
    assert!(asymptote > 1000.0);
    assert!(asymptote < 1001.0);
}

// ============================================================================
// Transform Tests
// ============================================================================

/// Test transform landmarks.
///
/// Verifies t = −1 at the start, 0 at the peak and 1 at the symmetric end.
#[test]
fn test_transform_landmarks() {
    let transform = CycleTransform::new(-40, 40, 0, 1.0f64);
    assert_relative_eq!(transform.t(-40), -1.0, epsilon = 1e-12);
    assert_relative_eq!(transform.t(-20), 0.0, epsilon = 1e-12);
    assert_relative_eq!(transform.t(0), 1.0, epsilon = 1e-12);
}

/// Test post-peak dilation.
///
/// Verifies that dilation only stretches the post-peak half.
#[test]
fn test_transform_dilation() {
    let transform = CycleTransform::new(0, 40, 0, 2.0f64);
    assert_relative_eq!(transform.t(0), -1.0, epsilon = 1e-12);
    assert_relative_eq!(transform.t(40), 0.5, epsilon = 1e-12);
}

/// Test lag shift.
///
/// Verifies that the lag moves the whole clock later.
#[test]
fn test_transform_lag() {
    let cases = CycleTransform::new(0, 30, 0, 1.0f64);
    let deaths = CycleTransform::new(0, 30, 6, 1.0f64);
    assert_relative_eq!(deaths.t(21), cases.t(15), epsilon = 1e-12);
}
