//! Domain layer for the vehicle location service.
//!
//! This crate provides:
//! - The `Location` entity and its translators to and from storage documents
//! - List queries and result pages
//! - Declarative field validation
//! - `LocationService`, the use-case layer over a `LocationRepository`

pub mod error;
pub mod location;
pub mod validation;

pub use error::DomainError;
pub use location::{
    Coordinates, Location, LocationInput, LocationPage, LocationQuery, LocationService, rules,
};
pub use validation::{Rule, ValidationErrors, Validator, Violation};
