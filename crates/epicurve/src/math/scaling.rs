//! Rescaling and rounding helpers shared by the smoothing and fitting stages.

// External dependencies
use num_traits::{Float, ToPrimitive};

// Convert a count or day index into the working float type.
#[inline]
pub fn to_float<T: Float, N: ToPrimitive>(n: N) -> T {
    T::from(n).unwrap_or_else(T::zero)
}

// Factor that maps `modeled` onto `actual`; 1 when `modeled` is not positive.
#[inline]
pub fn rescale_factor<T: Float>(actual: T, modeled: T) -> T {
    if modeled > T::zero() && actual.is_finite() {
        actual / modeled
    } else {
        T::one()
    }
}

// Tail stretch for the provisional end day: `dilation` clipped to `[1, clip]`.
#[inline]
pub fn decay_factor<T: Float>(dilation: T, clip: T) -> T {
    if dilation > T::one() {
        dilation.min(clip)
    } else {
        T::one()
    }
}

// Round to a fixed number of decimal places.
#[inline]
pub fn round_to<T: Float>(value: T, decimals: i32) -> T {
    let factor = to_float::<T, _>(10.0).powi(decimals);
    (value * factor).round() / factor
}
