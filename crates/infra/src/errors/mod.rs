//! Error conversions between infrastructure libraries and the domain
//!
//! External error types are translated into [`bookline_domain::BooklineError`]
//! at this boundary so repository code stays on the domain `Result` alias.

pub mod conversions;

// Re-export commonly used items
pub use conversions::InfraError;
