//! Port interfaces for the booking read path

use async_trait::async_trait;
use bookline_domain::{EventType, Result};
use uuid::Uuid;

/// Trait for loading bookable event types
#[async_trait]
pub trait EventTypeRepository: Send + Sync {
    /// Get an owner's event type by id, if present
    async fn find_event_type(&self, owner_id: &str, event_id: Uuid) -> Result<Option<EventType>>;
}
