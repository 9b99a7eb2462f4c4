//! SQLite-backed implementation of the ScheduleRepository port.
//!
//! This is the normalization boundary for stored availability rows: weekday
//! and time-of-day columns are plain text in the database and are parsed into
//! domain types here. Rows that fail to parse are skipped with a warning
//! instead of failing the whole schedule load.

use std::sync::Arc;

use async_trait::async_trait;
use bookline_core::ScheduleRepository;
use bookline_domain::{AvailabilityRule, BooklineError, Result, Schedule, TimeOfDay, Weekday};
use chrono::Utc;
use rusqlite::params;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite implementation of ScheduleRepository
pub struct SqliteScheduleRepository {
    db: Arc<DbManager>,
}

impl SqliteScheduleRepository {
    /// Create a new schedule repository
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepository {
    #[instrument(skip(self))]
    async fn find_schedule(&self, owner_id: &str) -> Result<Option<Schedule>> {
        let db = self.db.clone();
        let owner = owner_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = db.get_connection()?;

            let timezone = match conn.query_row(
                "SELECT timezone FROM schedules WHERE owner_id = ?1",
                params![owner],
                |row| row.get::<_, String>(0),
            ) {
                Ok(timezone) => timezone,
                Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                Err(e) => return Err(InfraError::from(e).into()),
            };

            let mut stmt = conn
                .prepare(
                    "SELECT day_of_week, start_time, end_time
                     FROM schedule_availabilities
                     WHERE owner_id = ?1
                     ORDER BY day_of_week, start_time",
                )
                .map_err(InfraError::from)?;

            let rows = stmt
                .query_map(params![owner], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                })
                .map_err(InfraError::from)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(InfraError::from)?;

            let mut schedule = Schedule::new(owner.clone(), timezone);
            for (day_raw, start_raw, end_raw) in rows {
                match parse_rule(&day_raw, &start_raw, &end_raw) {
                    Ok(rule) => schedule.rules.push(rule),
                    Err(e) => warn!(
                        owner_id = %owner,
                        day = %day_raw,
                        start = %start_raw,
                        end = %end_raw,
                        error = %e,
                        "skipping malformed availability row"
                    ),
                }
            }

            debug!(owner_id = %owner, rule_count = schedule.rules.len(), "loaded schedule");

            Ok(Some(schedule))
        })
        .await
        .map_err(|e| BooklineError::Database(format!("blocking task failed: {e}")))?
    }

    #[instrument(skip(self, schedule), fields(owner_id = %schedule.owner_id))]
    async fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        let db = self.db.clone();
        let schedule = schedule.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = db.get_connection()?;
            let now = Utc::now().timestamp();

            let tx = conn.transaction().map_err(InfraError::from)?;

            tx.execute(
                "INSERT INTO schedules (owner_id, timezone, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)
                 ON CONFLICT(owner_id) DO UPDATE SET
                     timezone = excluded.timezone,
                     updated_at = excluded.updated_at",
                params![schedule.owner_id, schedule.timezone, now],
            )
            .map_err(InfraError::from)?;

            // Replace the full rule set so removed windows do not linger.
            tx.execute(
                "DELETE FROM schedule_availabilities WHERE owner_id = ?1",
                params![schedule.owner_id],
            )
            .map_err(InfraError::from)?;

            for rule in &schedule.rules {
                tx.execute(
                    "INSERT INTO schedule_availabilities
                         (id, owner_id, day_of_week, start_time, end_time, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        Uuid::new_v4().to_string(),
                        schedule.owner_id,
                        rule.day_of_week.to_string(),
                        rule.start.to_string(),
                        rule.end.to_string(),
                        now
                    ],
                )
                .map_err(InfraError::from)?;
            }

            tx.commit().map_err(InfraError::from)?;

            debug!(
                owner_id = %schedule.owner_id,
                rule_count = schedule.rules.len(),
                "saved schedule"
            );

            Ok(())
        })
        .await
        .map_err(|e| BooklineError::Database(format!("blocking task failed: {e}")))?
    }
}

fn parse_rule(day: &str, start: &str, end: &str) -> Result<AvailabilityRule> {
    let day = day.parse::<Weekday>().map_err(BooklineError::InvalidWeekday)?;
    let start = start.parse::<TimeOfDay>()?;
    let end = end.parse::<TimeOfDay>()?;
    AvailabilityRule::new(day, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rule_accepts_canonical_rows() {
        let rule = parse_rule("monday", "09:00", "12:00").unwrap();
        assert_eq!(rule.day_of_week, Weekday::Monday);
        assert_eq!(rule.start.to_string(), "09:00");
        assert_eq!(rule.end.to_string(), "12:00");
    }

    #[test]
    fn parse_rule_accepts_mixed_case_weekdays() {
        let rule = parse_rule("Wednesday", "08:30", "10:00").unwrap();
        assert_eq!(rule.day_of_week, Weekday::Wednesday);
    }

    #[test]
    fn parse_rule_rejects_misspelled_weekday() {
        let result = parse_rule("wendesday", "09:00", "12:00");
        assert!(matches!(result, Err(BooklineError::InvalidWeekday(_))));
    }

    #[test]
    fn parse_rule_rejects_malformed_times() {
        assert!(parse_rule("monday", "25:00", "26:00").is_err());
        assert!(parse_rule("monday", "noon", "13:00").is_err());
    }

    #[test]
    fn parse_rule_rejects_inverted_window() {
        let result = parse_rule("monday", "12:00", "09:00");
        assert!(matches!(result, Err(BooklineError::InvalidRule(_))));
    }
}
