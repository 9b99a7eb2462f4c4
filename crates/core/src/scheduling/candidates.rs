//! Candidate grid construction
//!
//! The resolver filters an externally supplied sequence of candidate start
//! instants. This module is that supplier: an evenly spaced grid from "now,
//! rounded up to the next step boundary" through "end of day, a configured
//! number of days ahead". Grid boundaries are multiples of the step counted
//! from the Unix epoch, which for steps dividing 60 lines up with the usual
//! quarter-hour clock marks.

use bookline_domain::{BookingConfig, BooklineError, Result};
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Bounded range of instants currently open for booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingHorizon {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookingHorizon {
    /// Horizon opening at `now` rounded up to the next step boundary and
    /// closing at end of day `horizon_days` later
    ///
    /// # Errors
    /// Returns `Config` if the configured step is zero or the horizon
    /// arithmetic leaves the representable time range.
    pub fn starting(now: DateTime<Utc>, config: &BookingConfig) -> Result<Self> {
        let start = round_up_to_step(now, config.slot_step_minutes)?;
        let horizon = Duration::try_days(config.horizon_days)
            .ok_or_else(|| horizon_error(config.horizon_days))?;
        let end_day = start
            .checked_add_signed(horizon)
            .ok_or_else(|| horizon_error(config.horizon_days))?
            .date_naive();
        let end = Utc
            .from_utc_datetime(&end_day.and_time(NaiveTime::MIN))
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| horizon_error(config.horizon_days))?
            - Duration::seconds(1);
        Ok(Self { start, end })
    }
}

/// The ordered, evenly spaced candidate start instants within a horizon
///
/// Includes every step from `horizon.start` up to and including the last one
/// at or before `horizon.end`. Empty when the horizon is inverted.
///
/// # Errors
/// Returns `Config` if the step is zero.
pub fn candidate_starts(
    horizon: &BookingHorizon,
    step_minutes: u32,
) -> Result<Vec<DateTime<Utc>>> {
    if step_minutes == 0 {
        return Err(positive_step_error());
    }

    let step = Duration::minutes(i64::from(step_minutes));
    let mut starts = Vec::new();
    let mut cursor = horizon.start;
    while cursor <= horizon.end {
        starts.push(cursor);
        cursor += step;
    }
    Ok(starts)
}

/// Round an instant up to the next step boundary, keeping exact boundaries
fn round_up_to_step(now: DateTime<Utc>, step_minutes: u32) -> Result<DateTime<Utc>> {
    if step_minutes == 0 {
        return Err(positive_step_error());
    }

    let step_secs = i64::from(step_minutes) * 60;
    let secs = now.timestamp();
    let on_boundary = secs.rem_euclid(step_secs) == 0 && now.timestamp_subsec_nanos() == 0;
    let rounded = if on_boundary { secs } else { (secs.div_euclid(step_secs) + 1) * step_secs };

    DateTime::from_timestamp(rounded, 0)
        .ok_or_else(|| BooklineError::Config(format!("booking horizon out of range from {now}")))
}

fn positive_step_error() -> BooklineError {
    BooklineError::Config("slot step must be a positive number of minutes".to_string())
}

fn horizon_error(days: i64) -> BooklineError {
    BooklineError::Config(format!("booking horizon of {days} days is out of range"))
}
