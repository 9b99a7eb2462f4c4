//! Domain types and models

pub mod booking;
pub mod schedule;
pub mod slot;

pub use booking::EventType;
pub use schedule::{AvailabilityRule, Schedule, TimeOfDay, Weekday};
pub use slot::TimeSlot;
