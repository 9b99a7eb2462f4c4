//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Bookline
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BooklineError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar provider error: {0}")]
    Calendar(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid availability rule: {0}")]
    InvalidRule(String),

    #[error("Invalid time slot: {0}")]
    InvalidSlot(String),

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Candidate times must be in ascending order")]
    UnorderedCandidates,

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for Bookline operations
pub type Result<T> = std::result::Result<T, BooklineError>;
