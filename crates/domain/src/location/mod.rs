//! Location entity, queries, and use cases.

mod entity;
mod query;
mod service;

pub use entity::{Coordinates, Location, LocationInput};
pub use query::{LocationPage, LocationQuery};
pub use service::LocationService;

/// Field constraints shared by every input that carries location data.
pub mod rules {
    use crate::validation::Rule;

    pub const VEHICLE_ID: &[Rule] = &[Rule::Required, Rule::Alphanumeric, Rule::Len(7)];
    pub const LATITUDE: &[Rule] = &[Rule::Required, Rule::Latitude];
    pub const LONGITUDE: &[Rule] = &[Rule::Required, Rule::Longitude];
    pub const STATUS: &[Rule] = &[
        Rule::Required,
        Rule::OneOf(&["moving", "stopped", "offline"]),
    ];
    pub const SPEED: &[Rule] = &[Rule::Gte(0), Rule::Lte(u32::MAX as i64)];
    pub const LIMIT: &[Rule] = &[Rule::Gte(1), Rule::Lte(100)];
    pub const PAGE: &[Rule] = &[Rule::Gte(1), Rule::Lte(u32::MAX as i64)];
}
