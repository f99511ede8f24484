//! Coordinate descent over the bell shape factor.
//!
//! ## Purpose
//!
//! Given a fixed scale `L`, this module searches for the shape factor `r`
//! that minimises the fit error. It probes one step below, at, and one step
//! above the current value, moves to the best of the three, and halves the
//! step whenever staying put wins.
//!
//! ## Design notes
//!
//! * **Bounded**: At most 16 probes; `r` is clamped to [4, 8] after every move.
//! * **Ties**: Staying wins every tie; between the two moves, lower wins.
//! * **Missing errors**: A probe with no error (or NaN) scores as infinite.
//!
//! ## Invariants
//!
//! * The returned shape always lies in [4, 8].
//!
//! ## Non-goals
//!
//! * This module does not know what the error function measures.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::to_float;

// ============================================================================
// Constants
// ============================================================================

/// Lowest admissible shape factor.
pub const MIN_SHAPE: f64 = 4.0;

/// Highest admissible shape factor.
pub const MAX_SHAPE: f64 = 8.0;

/// Initial probe step.
pub const INITIAL_STEP: f64 = 2.0;

/// The search stops once the step is no longer above this floor.
pub const STEP_FLOOR: f64 = 0.01;

/// Probe cap.
pub const MAX_PROBES: usize = 16;

// ============================================================================
// Descent
// ============================================================================

/// Result of a shape search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescent<T> {
    /// Best shape factor found.
    pub shape: T,

    /// Probes used.
    pub probes: usize,

    /// True when the step shrank to the floor before the probe cap.
    pub converged: bool,
}

// Treat a missing or NaN error as worse than any real one.
#[inline]
fn score<T: Float>(error: Option<T>) -> T {
    match error {
        Some(e) if !e.is_nan() => e,
        _ => T::infinity(),
    }
}

/// Search for the shape factor minimising `error`, starting from `initial`.
pub fn descend_shape<T, F>(initial: T, mut error: F) -> ShapeDescent<T>
where
    T: Float,
    F: FnMut(T) -> Option<T>,
{
    let min_shape: T = to_float(MIN_SHAPE);
    let max_shape: T = to_float(MAX_SHAPE);
    let floor: T = to_float(STEP_FLOOR);
    let two: T = to_float(2);

    let mut shape = initial.max(min_shape).min(max_shape);
    let mut step: T = to_float(INITIAL_STEP);
    let mut probes = 0;

    while step > floor && probes < MAX_PROBES {
        let lower = score(error(shape - step));
        let same = score(error(shape));
        let upper = score(error(shape + step));

        if same <= lower && same <= upper {
            step = step / two;
        } else if lower <= upper {
            shape = shape - step;
        } else {
            shape = shape + step;
        }

        shape = shape.max(min_shape).min(max_shape);
        probes += 1;
    }

    ShapeDescent {
        shape,
        probes,
        converged: step <= floor,
    }
}
