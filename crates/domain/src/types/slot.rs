//! Absolute time intervals
//!
//! `TimeSlot` is the one interval type shared by availability windows,
//! candidate occupied ranges, and external busy periods, so the boundary
//! rules below apply uniformly everywhere intervals meet.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BooklineError, Result};

/// Half-open absolute interval `[start, end)` in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Create an interval, enforcing `start < end`
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the interval is empty or inverted.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(BooklineError::InvalidSlot(format!(
                "interval {start} .. {end} must start before it ends"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `other` fits entirely inside this interval
    ///
    /// Boundaries are inclusive: an interval ending exactly at `self.end`
    /// (or starting exactly at `self.start`) is still enclosed.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether two intervals overlap
    ///
    /// Open-interval test: merely touching endpoints (one ends exactly where
    /// the other starts) is not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {})", self.start, self.end)
    }
}
