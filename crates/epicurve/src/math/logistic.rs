//! Logistic growth curve and its derivative.
//!
//! ## Purpose
//!
//! This module provides the closed-form building blocks of the curve fitter:
//! the bell distribution (derivative of the logistic curve) that models new
//! cases or deaths per day, and the algebraic inverses that recover the scale
//! factor from one known point.
//!
//! ## Design notes
//!
//! * **Pure**: All functions are stateless and operate on the scaled time `t`.
//! * **Generics**: All functions are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Sigmoid**: `S(t) = L / (1 + e^(−rt))`, the cumulative population curve.
//! * **Bell**: `A(t) = L · e^(−rt) / (1 + e^(−rt))²`, its derivative up to a
//!   constant factor, peaking at `t = 0` with height `L / 4`.
//! * **Inverse**: Given `A`, `r` and `t`, the scale `L` is unique.
//!
//! ## Invariants
//!
//! * `bell_scale(bell_amplitude(L, r, t), r, t) == L` up to rounding.
//! * The bell is symmetric in `t` and strictly positive for `L > 0`.
//!
//! ## Non-goals
//!
//! * This module does not map days to scaled time (see `transform`).
//! * This module does not search for the shape factor `r`.

// External dependencies
use num_traits::Float;

/// Height of the bell distribution at scaled time `t`.
///
/// ```text
/// A = L · e^(−rt) / (1 + e^(−rt))²
/// ```
#[inline]
pub fn bell_amplitude<T: Float>(scale: T, shape: T, t: T) -> T {
    let e = (-shape * t).exp();
    let denom = T::one() + e;
    scale * e / (denom * denom)
}

/// Scale factor `L` of the bell distribution passing through `amplitude` at `t`.
///
/// ```text
/// L = A · (1 + e^(−rt))² / e^(−rt)
/// ```
#[inline]
pub fn bell_scale<T: Float>(amplitude: T, shape: T, t: T) -> T {
    let e = (-shape * t).exp();
    let numer = T::one() + e;
    amplitude * numer * numer / e
}

/// Scale factor `X` of the sigmoid curve passing through `amplitude` at `t`.
///
/// `X` is the asymptotic total the cumulative curve approaches.
#[inline]
pub fn sigmoid_scale<T: Float>(amplitude: T, shape: T, t: T) -> T {
    amplitude * (T::one() + (-shape * t).exp())
}
