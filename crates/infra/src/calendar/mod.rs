//! Busy-calendar adapters
//!
//! The availability resolver only needs something that can answer "which
//! intervals are busy inside this range". [`StaticBusyCalendar`] serves a
//! fixed interval set (pre-fetched feeds, demos, tests); [`NoopBusyCalendar`]
//! reports no conflicts at all.

use async_trait::async_trait;
use bookline_core::BusyCalendarProvider;
use bookline_domain::{Result, TimeSlot};
use tracing::{debug, instrument};

/// Busy-calendar provider backed by a fixed interval set.
pub struct StaticBusyCalendar {
    busy: Vec<TimeSlot>,
}

impl StaticBusyCalendar {
    /// Create a provider serving the given intervals.
    pub fn new(busy: Vec<TimeSlot>) -> Self {
        Self { busy }
    }
}

#[async_trait]
impl BusyCalendarProvider for StaticBusyCalendar {
    #[instrument(skip(self, range), fields(range = %range))]
    async fn busy_intervals(&self, owner_id: &str, range: &TimeSlot) -> Result<Vec<TimeSlot>> {
        let hits: Vec<TimeSlot> =
            self.busy.iter().filter(|slot| slot.overlaps(range)).copied().collect();

        debug!(owner_id, count = hits.len(), "served busy intervals");

        Ok(hits)
    }
}

/// Busy-calendar provider that never reports conflicts.
pub struct NoopBusyCalendar;

#[async_trait]
impl BusyCalendarProvider for NoopBusyCalendar {
    async fn busy_intervals(&self, _owner_id: &str, _range: &TimeSlot) -> Result<Vec<TimeSlot>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn slot(start_hour: u32, end_hour: u32) -> TimeSlot {
        TimeSlot {
            start: Utc.with_ymd_and_hms(2025, 3, 10, start_hour, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 10, end_hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn static_calendar_filters_to_overlapping_intervals() {
        let calendar = StaticBusyCalendar::new(vec![slot(6, 7), slot(9, 10), slot(14, 15)]);

        let hits = calendar.busy_intervals("owner-1", &slot(8, 12)).await.unwrap();
        assert_eq!(hits, vec![slot(9, 10)]);
    }

    #[tokio::test]
    async fn static_calendar_excludes_touching_intervals() {
        // Busy block ending exactly where the range starts cannot conflict.
        let calendar = StaticBusyCalendar::new(vec![slot(7, 8), slot(12, 13)]);

        let hits = calendar.busy_intervals("owner-1", &slot(8, 12)).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn noop_calendar_is_always_free() {
        let hits = NoopBusyCalendar.busy_intervals("owner-1", &slot(0, 23)).await.unwrap();
        assert!(hits.is_empty());
    }
}
