//! The location entity and its storage translators.

use chrono::{DateTime, Utc};
use common::LocationStatus;
use location_store::{CoordinatesDocument, LocationDocument, StoredLocation};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair, kept as the decimal strings the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// Validated location data supplied by a client for create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInput {
    pub vehicle_id: String,
    pub coordinates: Coordinates,
    pub status: LocationStatus,
    pub speed: u32,
}

/// A recorded vehicle location.
///
/// The identifier is empty until the location has been persisted and
/// does not change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: String,
    pub vehicle_id: String,
    pub timestamp: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub speed: u32,
    pub status: LocationStatus,
}

impl Location {
    /// Creates an unsaved location stamped with the current time.
    pub fn new(input: LocationInput) -> Self {
        Self {
            id: String::new(),
            vehicle_id: input.vehicle_id,
            timestamp: Utc::now(),
            coordinates: input.coordinates,
            speed: input.speed,
            status: input.status,
        }
    }

    /// The storage-assigned identifier, empty before persistence.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Records the identifier assigned on insert.
    pub fn persisted(mut self, id: impl Into<String>) -> Self {
        debug_assert!(self.id.is_empty(), "location id is immutable");
        self.id = id.into();
        self
    }

    /// Builds the document to write; the identifier is left to storage.
    pub fn to_document(&self) -> LocationDocument {
        LocationDocument {
            vehicle_id: self.vehicle_id.clone(),
            timestamp: self.timestamp,
            location: CoordinatesDocument {
                latitude: self.coordinates.latitude.clone(),
                longitude: self.coordinates.longitude.clone(),
            },
            speed: self.speed,
            status: self.status,
        }
    }
}

impl From<StoredLocation> for Location {
    fn from(stored: StoredLocation) -> Self {
        Self {
            id: stored.id.to_hex(),
            vehicle_id: stored.vehicle_id,
            timestamp: stored.timestamp,
            coordinates: Coordinates {
                latitude: stored.location.latitude,
                longitude: stored.location.longitude,
            },
            speed: stored.speed,
            status: stored.status,
        }
    }
}
