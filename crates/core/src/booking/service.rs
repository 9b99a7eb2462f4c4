//! Booking service - resolves bookable times for one event type

use std::sync::Arc;

use bookline_domain::{BooklineError, Result};
use chrono::{DateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use super::ports::EventTypeRepository;
use crate::scheduling::AvailabilityService;

/// The booking page's read path
///
/// Looks up the requested event type and asks the availability service which
/// candidate instants can hold a booking of that event's duration.
pub struct BookingService {
    events: Arc<dyn EventTypeRepository>,
    availability: Arc<AvailabilityService>,
}

impl BookingService {
    /// Create a new booking service
    pub fn new(
        events: Arc<dyn EventTypeRepository>,
        availability: Arc<AvailabilityService>,
    ) -> Self {
        Self { events, availability }
    }

    /// Valid start instants for booking the given event type
    ///
    /// # Errors
    /// Returns `NotFound` when the event type is missing or inactive;
    /// otherwise whatever the availability resolution surfaces.
    #[instrument(skip(self, candidates), fields(candidate_count = candidates.len()))]
    pub async fn bookable_times(
        &self,
        owner_id: &str,
        event_id: Uuid,
        candidates: &[DateTime<Utc>],
    ) -> Result<Vec<DateTime<Utc>>> {
        let event = self
            .events
            .find_event_type(owner_id, event_id)
            .await?
            .filter(|event| event.is_active)
            .ok_or_else(|| BooklineError::NotFound(format!("event type {event_id}")))?;

        self.availability.valid_start_times(candidates, owner_id, event.duration_minutes).await
    }
}
