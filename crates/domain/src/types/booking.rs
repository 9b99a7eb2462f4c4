//! Bookable event types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_EVENT_DURATION_MINUTES, MIN_EVENT_DURATION_MINUTES};
use crate::errors::{BooklineError, Result};

/// A bookable service offered by a practitioner
///
/// Carries the duration the availability filter needs and the active flag
/// that gates whether visitors may book it at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventType {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: u32,
    pub is_active: bool,
}

impl EventType {
    /// Create an active event type with a fresh id
    ///
    /// # Errors
    /// Returns `InvalidDuration` if the duration is zero or longer than
    /// twelve hours.
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<Self> {
        Self::check_duration(duration_minutes)?;
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            name: name.into(),
            description: None,
            duration_minutes,
            is_active: true,
        })
    }

    /// Validate event duration bounds
    ///
    /// Shared by the constructor and by repositories hydrating stored rows.
    ///
    /// # Errors
    /// Returns `InvalidDuration` when outside `1..=720` minutes.
    pub fn check_duration(minutes: u32) -> Result<()> {
        if !(MIN_EVENT_DURATION_MINUTES..=MAX_EVENT_DURATION_MINUTES).contains(&minutes) {
            return Err(BooklineError::InvalidDuration(i64::from(minutes)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let event = EventType::new("owner-1", "Intro session", 30).unwrap();
        assert_eq!(event.owner_id, "owner-1");
        assert_eq!(event.name, "Intro session");
        assert_eq!(event.duration_minutes, 30);
        assert!(event.is_active);
        assert!(event.description.is_none());
    }

    #[test]
    fn test_duration_bounds() {
        assert!(EventType::check_duration(1).is_ok());
        assert!(EventType::check_duration(720).is_ok());
        assert!(matches!(
            EventType::check_duration(0),
            Err(BooklineError::InvalidDuration(0))
        ));
        assert!(matches!(
            EventType::check_duration(721),
            Err(BooklineError::InvalidDuration(721))
        ));
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = EventType::new("owner-1", "A", 30).unwrap();
        let b = EventType::new("owner-1", "B", 30).unwrap();
        assert_ne!(a.id, b.id);
    }
}
