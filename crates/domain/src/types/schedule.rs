//! Weekly availability types
//!
//! A practitioner's recurring availability is a set of weekly rules
//! ("Tuesday 09:00-17:00") grouped under a schedule that also names the IANA
//! timezone those wall-clock times are expressed in.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::{BooklineError, Result};

// ============================================================================
// Weekday
// ============================================================================

/// Day of the week
///
/// The canonical weekday identifiers for stored availability rows. Stored
/// strings that do not parse into this enum are configuration errors; there
/// are no alternate spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

// Use the domain enum macro
crate::impl_domain_enum_conversions!(Weekday {
    Monday => "monday",
    Tuesday => "tuesday",
    Wednesday => "wednesday",
    Thursday => "thursday",
    Friday => "friday",
    Saturday => "saturday",
    Sunday => "sunday"
});

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

// ============================================================================
// TimeOfDay
// ============================================================================

/// Minute-precision wall-clock time with no date component
///
/// Parses from `"HH:MM"` and renders zero-padded. Out-of-range or malformed
/// values are rejected, never guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a wall-clock time, validating ranges
    ///
    /// # Errors
    /// Returns `InvalidTimeOfDay` if `hour >= 24` or `minute >= 60`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(BooklineError::InvalidTimeOfDay(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The same wall-clock time as a `chrono::NaiveTime`
    ///
    /// Infallible: construction already bounds the fields.
    pub fn as_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = BooklineError;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| BooklineError::InvalidTimeOfDay(s.to_string()))?;
        let hour: u8 =
            hour.parse().map_err(|_| BooklineError::InvalidTimeOfDay(s.to_string()))?;
        let minute: u8 =
            minute.parse().map_err(|_| BooklineError::InvalidTimeOfDay(s.to_string()))?;
        Self::new(hour, minute).map_err(|_| BooklineError::InvalidTimeOfDay(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = BooklineError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

// ============================================================================
// AvailabilityRule
// ============================================================================

/// One weekly recurring availability window
///
/// "Every `day_of_week`, available from `start` to `end`" in the owning
/// schedule's timezone. Multiple disjoint rules on the same weekday model a
/// split day (morning and evening blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub day_of_week: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl AvailabilityRule {
    /// Create a rule, enforcing `start < end`
    ///
    /// # Errors
    /// Returns `InvalidRule` if the window is empty or inverted.
    pub fn new(day_of_week: Weekday, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(BooklineError::InvalidRule(format!(
                "{day_of_week} window {start}-{end} must start before it ends"
            )));
        }
        Ok(Self { day_of_week, start, end })
    }
}

// ============================================================================
// Schedule
// ============================================================================

/// A practitioner's full weekly availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub owner_id: String,
    /// IANA timezone name the rule times are expressed in
    pub timezone: String,
    pub rules: Vec<AvailabilityRule>,
}

impl Schedule {
    pub fn new(owner_id: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self { owner_id: owner_id.into(), timezone: timezone.into(), rules: Vec::new() }
    }

    /// Parse the stored timezone name
    ///
    /// # Errors
    /// Returns `InvalidTimezone` if the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| BooklineError::InvalidTimezone(self.timezone.clone()))
    }

    /// Rules recurring on the given weekday, in stored order
    pub fn rules_on(&self, day: Weekday) -> impl Iterator<Item = &AvailabilityRule> {
        self.rules.iter().filter(move |rule| rule.day_of_week == day)
    }
}
