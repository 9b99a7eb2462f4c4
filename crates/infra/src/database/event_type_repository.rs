//! SQLite-backed implementation of the EventTypeRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use bookline_core::EventTypeRepository;
use bookline_domain::{BooklineError, EventType, Result};
use chrono::Utc;
use rusqlite::params;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite implementation of EventTypeRepository
pub struct SqliteEventTypeRepository {
    db: Arc<DbManager>,
}

impl SqliteEventTypeRepository {
    /// Create a new event type repository
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Insert or update an event type.
    #[instrument(skip(self, event), fields(event_id = %event.id, owner_id = %event.owner_id))]
    pub async fn save_event_type(&self, event: &EventType) -> Result<()> {
        EventType::check_duration(event.duration_minutes)?;

        let db = self.db.clone();
        let event = event.clone();
        tokio::task::spawn_blocking(move || {
            let conn = db.get_connection()?;
            let now = Utc::now().timestamp();

            conn.execute(
                "INSERT INTO event_types
                     (id, owner_id, name, description, duration_minutes, is_active,
                      created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
                 ON CONFLICT(id) DO UPDATE SET
                     name = excluded.name,
                     description = excluded.description,
                     duration_minutes = excluded.duration_minutes,
                     is_active = excluded.is_active,
                     updated_at = excluded.updated_at",
                params![
                    event.id.to_string(),
                    event.owner_id,
                    event.name,
                    event.description,
                    event.duration_minutes,
                    event.is_active,
                    now
                ],
            )
            .map_err(InfraError::from)?;

            debug!(event_id = %event.id, "saved event type");

            Ok(())
        })
        .await
        .map_err(|e| BooklineError::Database(format!("blocking task failed: {e}")))?
    }

    /// All event types owned by a practitioner, newest first.
    #[instrument(skip(self))]
    pub async fn list_event_types(&self, owner_id: &str) -> Result<Vec<EventType>> {
        let db = self.db.clone();
        let owner = owner_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, owner_id, name, description, duration_minutes, is_active
                     FROM event_types
                     WHERE owner_id = ?1
                     ORDER BY created_at DESC, id",
                )
                .map_err(InfraError::from)?;

            let rows = stmt
                .query_map(params![owner], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, u32>(4)?,
                        row.get::<_, bool>(5)?,
                    ))
                })
                .map_err(InfraError::from)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(InfraError::from)?;

            let mut events = Vec::with_capacity(rows.len());
            for (id_raw, owner_id, name, description, duration_minutes, is_active) in rows {
                match Uuid::parse_str(&id_raw) {
                    Ok(id) => events.push(EventType {
                        id,
                        owner_id,
                        name,
                        description,
                        duration_minutes,
                        is_active,
                    }),
                    Err(e) => warn!(
                        owner_id = %owner,
                        id = %id_raw,
                        error = %e,
                        "skipping event type with malformed id"
                    ),
                }
            }

            debug!(owner_id = %owner, count = events.len(), "listed event types");

            Ok(events)
        })
        .await
        .map_err(|e| BooklineError::Database(format!("blocking task failed: {e}")))?
    }
}

#[async_trait]
impl EventTypeRepository for SqliteEventTypeRepository {
    #[instrument(skip(self))]
    async fn find_event_type(&self, owner_id: &str, event_id: Uuid) -> Result<Option<EventType>> {
        let db = self.db.clone();
        let owner = owner_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT name, description, duration_minutes, is_active
                 FROM event_types
                 WHERE id = ?1 AND owner_id = ?2",
                params![event_id.to_string(), owner],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, u32>(2)?,
                        row.get::<_, bool>(3)?,
                    ))
                },
            );

            match result {
                Ok((name, description, duration_minutes, is_active)) => Ok(Some(EventType {
                    id: event_id,
                    owner_id: owner,
                    name,
                    description,
                    duration_minutes,
                    is_active,
                })),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(InfraError::from(e).into()),
            }
        })
        .await
        .map_err(|e| BooklineError::Database(format!("blocking task failed: {e}")))?
    }
}
