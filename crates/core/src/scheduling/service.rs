//! Availability resolution service - core business logic

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use bookline_domain::{BooklineError, Result, TimeSlot};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, instrument};

use super::ports::{BusyCalendarProvider, ScheduleRepository};
use super::windows::windows_on;

/// Availability resolution service
///
/// A pure per-call computation: two collaborator reads issued concurrently,
/// then an in-memory filter over the candidate sequence. No writes, no
/// retained state between calls.
pub struct AvailabilityService {
    schedules: Arc<dyn ScheduleRepository>,
    calendar: Arc<dyn BusyCalendarProvider>,
}

impl AvailabilityService {
    /// Create a new availability service
    pub fn new(
        schedules: Arc<dyn ScheduleRepository>,
        calendar: Arc<dyn BusyCalendarProvider>,
    ) -> Self {
        Self { schedules, calendar }
    }

    /// Filter candidate instants down to valid booking start times
    ///
    /// A candidate is kept when its occupied interval `[candidate,
    /// candidate + duration)` lies inside a single availability window for
    /// its calendar date (viewed in the practitioner's timezone) and
    /// overlaps no busy interval from the external calendar. Output
    /// preserves input order.
    ///
    /// A practitioner without a schedule, or with an empty rule set, yields
    /// `Ok` with no candidates: nothing bookable is a normal state, not a
    /// failure.
    ///
    /// # Errors
    /// - `InvalidDuration` when the duration is zero
    /// - `UnorderedCandidates` when the sequence is not non-decreasing
    /// - `InvalidTimezone` / `Config` when the schedule is misconfigured
    /// - `Calendar` / `Database` when a collaborator fails
    #[instrument(skip(self, candidates), fields(candidate_count = candidates.len()))]
    pub async fn valid_start_times(
        &self,
        candidates: &[DateTime<Utc>],
        owner_id: &str,
        duration_minutes: u32,
    ) -> Result<Vec<DateTime<Utc>>> {
        if duration_minutes == 0 {
            return Err(BooklineError::InvalidDuration(0));
        }
        if candidates.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(BooklineError::UnorderedCandidates);
        }
        let (Some(&first), Some(&last)) = (candidates.first(), candidates.last()) else {
            return Ok(Vec::new());
        };

        let duration = Duration::minutes(i64::from(duration_minutes));

        // One schedule read and one busy read cover the whole call; neither
        // depends on the other, so they run concurrently.
        let range = TimeSlot { start: first, end: last + duration };
        let (schedule, busy) = tokio::try_join!(
            self.schedules.find_schedule(owner_id),
            self.calendar.busy_intervals(owner_id, &range),
        )?;

        let Some(schedule) = schedule else {
            debug!(owner_id, "no schedule on file; nothing bookable");
            return Ok(Vec::new());
        };
        if schedule.rules.is_empty() {
            debug!(owner_id, "schedule has no rules; nothing bookable");
            return Ok(Vec::new());
        }

        reject_inverted(&busy)?;
        let tz = schedule.tz()?;

        let mut windows_by_date: HashMap<NaiveDate, Vec<TimeSlot>> = HashMap::new();
        let mut valid = Vec::new();
        for &candidate in candidates {
            // The candidate's calendar date in the practitioner's zone
            // decides which weekday's rules apply.
            let date = candidate.with_timezone(&tz).date_naive();
            let windows = match windows_by_date.entry(date) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(windows_on(&schedule.rules, date, tz)?),
            };

            let occupied = TimeSlot { start: candidate, end: candidate + duration };
            let inside_window = windows.iter().any(|window| window.encloses(&occupied));
            let conflict_free = !busy.iter().any(|interval| interval.overlaps(&occupied));
            if inside_window && conflict_free {
                valid.push(candidate);
            }
        }

        debug!(valid_count = valid.len(), "resolved valid start times");
        Ok(valid)
    }
}

/// Reject busy intervals that end at or before their start
fn reject_inverted(busy: &[TimeSlot]) -> Result<()> {
    for interval in busy {
        if interval.start >= interval.end {
            return Err(BooklineError::Calendar(format!(
                "calendar returned an inverted busy interval starting {}",
                interval.start
            )));
        }
    }
    Ok(())
}
