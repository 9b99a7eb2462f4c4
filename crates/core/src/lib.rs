//! # Bookline Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The availability resolver (weekly rules + busy calendar -> bookable starts)
//! - Port/adapter interfaces (traits)
//! - The booking read path built on top of the resolver
//!
//! ## Architecture Principles
//! - Only depends on `bookline-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod booking;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use booking::ports::EventTypeRepository;
pub use booking::BookingService;
pub use scheduling::ports::{BusyCalendarProvider, ScheduleRepository};
pub use scheduling::{candidate_starts, AvailabilityService, BookingHorizon};
