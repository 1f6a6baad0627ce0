//! Shared value types for the vehicle location service.

pub mod types;

pub use types::{LocationStatus, Pagination, UnknownStatus};
