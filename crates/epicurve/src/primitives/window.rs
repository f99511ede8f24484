//! Windowing primitives for centred moving averages.
//!
//! This module provides the inclusive index bounds of a centred window over a
//! daily series, and the odd-width coercion that keeps the window balanced
//! around its centre day.

// External dependencies
use core::ops::RangeInclusive;

// Inclusive window bounds `[left, right]` around a centre day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Force a window width to be odd so the average is centred.
    #[inline]
    pub fn coerce_width(width: usize) -> usize {
        if width % 2 == 0 { width + 1 } else { width }
    }

    // Number of days on each side of the centre for an odd width.
    #[inline]
    pub fn half_width(width: usize) -> usize {
        Self::coerce_width(width) / 2
    }

    // Full centred window around `idx`, or `None` when it would leave `[0, n)`.
    #[inline]
    pub fn centered(idx: usize, width: usize, n: usize) -> Option<Self> {
        let half = Self::half_width(width);
        let left = idx.checked_sub(half)?;
        let right = idx + half;
        if right >= n {
            return None;
        }
        Some(Self { left, right })
    }

    // Index range covered by the window.
    #[inline]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.left..=self.right
    }

    // Get the number of days in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }
}
