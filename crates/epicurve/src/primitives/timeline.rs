//! Relative day numbering.
//!
//! Day indices are relative to the latest report date: the latest record is
//! day 0, history is negative, and projected days are positive. A
//! [`Timeline`] converts between these relative days, positions in the
//! record vector and calendar dates.

// External dependencies
use chrono::{Duration, NaiveDate};

/// Mapping between relative days, record indices and dates for one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    /// Number of records in the series.
    pub len: usize,

    /// Date of the latest record (day 0).
    pub latest_date: NaiveDate,
}

impl Timeline {
    /// Create a timeline for a series of `len` records ending on `latest_date`.
    pub fn new(len: usize, latest_date: NaiveDate) -> Self {
        Self { len, latest_date }
    }

    /// Relative day of the record at `index`.
    #[inline]
    pub fn day_of(&self, index: usize) -> isize {
        index as isize - self.last_index()
    }

    /// Record index of a relative day, if it lies inside the series.
    #[inline]
    pub fn index_of(&self, day: isize) -> Option<usize> {
        let index = day + self.last_index();
        if index < 0 || index as usize >= self.len {
            None
        } else {
            Some(index as usize)
        }
    }

    /// Calendar date of a relative day (past or projected).
    #[inline]
    pub fn date_of(&self, day: isize) -> NaiveDate {
        self.latest_date + Duration::days(day as i64)
    }

    #[inline]
    fn last_index(&self) -> isize {
        self.len as isize - 1
    }
}
