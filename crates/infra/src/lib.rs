//! Infrastructure implementations of core domain ports
//!
//! This crate contains the SQLite-backed repositories behind the scheduling
//! and booking ports, busy-calendar adapters, configuration loading, and
//! tracing setup.

pub mod calendar;
pub mod config;
pub mod database;
pub mod errors;
pub mod observability;

pub use calendar::{NoopBusyCalendar, StaticBusyCalendar};
pub use database::{DbManager, SqliteEventTypeRepository, SqliteScheduleRepository};
pub use errors::InfraError;
