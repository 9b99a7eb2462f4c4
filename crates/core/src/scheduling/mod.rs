//! Availability resolution domain

pub mod candidates;
pub mod ports;
pub mod service;
pub mod windows;

pub use candidates::{candidate_starts, BookingHorizon};
pub use ports::*;
pub use service::*;
