//! SQLite persistence for schedules and event types
//!
//! [`DbManager`] owns the connection pool and migrations; the repositories
//! implement the core ports on top of it.

pub mod event_type_repository;
pub mod manager;
pub mod schedule_repository;

pub use event_type_repository::SqliteEventTypeRepository;
pub use manager::{DbConnection, DbManager};
pub use schedule_repository::SqliteScheduleRepository;
