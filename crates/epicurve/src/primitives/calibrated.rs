//! Configured-default versus observed-calibrated parameters.
//!
//! Expected growth days and the cases-to-deaths lag start from configured
//! defaults. Once the milestone detector sees a peak it judges reliable, the
//! observed interval takes precedence. [`Calibrated`] records which of the
//! two a value came from instead of overwriting a single field.

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// A parameter value tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calibrated<V> {
    /// Value taken from configuration; no reliable observation yet.
    Default(V),

    /// Value measured from the data.
    Observed(V),
}

impl<V: Copy> Calibrated<V> {
    /// The effective value, regardless of provenance.
    #[inline]
    pub fn value(&self) -> V {
        match *self {
            Self::Default(v) | Self::Observed(v) => v,
        }
    }

    /// Whether the value was measured from the data.
    #[inline]
    pub fn is_observed(&self) -> bool {
        matches!(self, Self::Observed(_))
    }
}

impl<V: Display> Display for Calibrated<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Default(v) => write!(f, "{v} (expected)"),
            Self::Observed(v) => write!(f, "{v} (observed)"),
        }
    }
}
