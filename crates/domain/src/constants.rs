//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use crate::types::Weekday;

/// All weekdays in calendar order, Monday first.
pub const DAYS_OF_WEEK_IN_ORDER: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

// Candidate grid configuration
pub const DEFAULT_SLOT_STEP_MINUTES: u32 = 15;
pub const DEFAULT_BOOKING_HORIZON_DAYS: i64 = 60;

// Event duration bounds (minutes)
pub const MIN_EVENT_DURATION_MINUTES: u32 = 1;
pub const MAX_EVENT_DURATION_MINUTES: u32 = 720;

// Resolution of a nonexistent local wall-clock time (DST spring-forward gap):
// scan forward minute by minute, bounded so a pathological zone cannot spin.
pub const DST_GAP_SCAN_LIMIT_MINUTES: u32 = 180;
