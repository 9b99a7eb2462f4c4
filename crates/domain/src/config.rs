//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOOKING_HORIZON_DAYS, DEFAULT_SLOT_STEP_MINUTES};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub booking: BookingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

/// Booking grid configuration
///
/// Controls the candidate grid offered to visitors: how far apart start
/// times are spaced and how far into the future bookings open up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    pub slot_step_minutes: u32,
    pub horizon_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: "bookline.db".to_string(),
                pool_size: 8,
            },
            booking: BookingConfig {
                slot_step_minutes: DEFAULT_SLOT_STEP_MINUTES,
                horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            },
        }
    }
}
