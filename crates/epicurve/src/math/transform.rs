//! Mapping from days to scaled cycle time.
//!
//! The bell model is evaluated on a normalised clock where `t = −1` falls on
//! the outbreak start and `t = +1` on the provisional end of a symmetric
//! cycle. Declines are typically slower than rises, so the post-peak side of
//! the clock is slowed down by a dilation factor. Deaths run on the same
//! clock shifted by the cases-to-deaths lag.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::to_float;

/// Day-to-`t` transform for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleTransform<T> {
    /// Relative start day (`t = −1` before any lag).
    pub start: isize,

    /// Symmetric cycle length in days; always positive.
    pub cycle: isize,

    /// Shift applied to the whole clock (0 for cases).
    pub lag: isize,

    /// Stretch applied to the post-peak half (1 means symmetric).
    pub dilation: T,
}

impl<T: Float> CycleTransform<T> {
    /// Create a transform.
    pub fn new(start: isize, cycle: isize, lag: isize, dilation: T) -> Self {
        Self {
            start,
            cycle,
            lag,
            dilation,
        }
    }

    /// Scaled time of a relative day.
    ///
    /// ```text
    /// x = 2·(day − start − lag) − cycle
    /// x = x / dilation        when x > 0
    /// t = x / cycle
    /// ```
    #[inline]
    pub fn t(&self, day: isize) -> T {
        let mut x: T = to_float(2 * (day - self.start - self.lag) - self.cycle);
        if x > T::zero() && self.dilation != T::one() {
            x = x / self.dilation;
        }
        x / to_float(self.cycle.max(1))
    }
}
