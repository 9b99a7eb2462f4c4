//! Port interfaces for availability resolution
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use bookline_domain::{Result, Schedule, TimeSlot};

/// Trait for loading and storing practitioner schedules
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Get the schedule owned by the given practitioner, if one exists
    async fn find_schedule(&self, owner_id: &str) -> Result<Option<Schedule>>;

    /// Persist a schedule, replacing its rule set as a whole
    async fn save_schedule(&self, schedule: &Schedule) -> Result<()>;
}

/// Trait for querying busy intervals from an external calendar
#[async_trait]
pub trait BusyCalendarProvider: Send + Sync {
    /// Busy intervals for the practitioner that intersect the given range
    async fn busy_intervals(&self, owner_id: &str, range: &TimeSlot) -> Result<Vec<TimeSlot>>;
}
