//! Storage-facing shapes of a location record.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use common::LocationStatus;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair as stored, kept as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatesDocument {
    pub latitude: String,
    pub longitude: String,
}

/// A location as written to the collection.
///
/// Carries no `_id`; the database assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDocument {
    pub vehicle_id: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub location: CoordinatesDocument,
    pub speed: u32,
    pub status: LocationStatus,
}

/// A location as read back from the collection, including its `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLocation {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub vehicle_id: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub location: CoordinatesDocument,
    pub speed: u32,
    pub status: LocationStatus,
}

impl StoredLocation {
    /// Attaches a database id to a written document.
    pub fn from_document(id: ObjectId, document: LocationDocument) -> Self {
        Self {
            id,
            vehicle_id: document.vehicle_id,
            timestamp: document.timestamp,
            location: document.location,
            speed: document.speed,
            status: document.status,
        }
    }

    /// Returns true if replacing this record's body with `document` changes it.
    pub fn differs_from(&self, document: &LocationDocument) -> bool {
        self.vehicle_id != document.vehicle_id
            || self.timestamp != document.timestamp
            || self.location != document.location
            || self.speed != document.speed
            || self.status != document.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocationDocument {
        LocationDocument {
            vehicle_id: "ABC1234".to_string(),
            timestamp: Utc::now(),
            location: CoordinatesDocument {
                latitude: "-23.55052".to_string(),
                longitude: "-46.633308".to_string(),
            },
            speed: 80,
            status: LocationStatus::Moving,
        }
    }

    #[test]
    fn document_serializes_without_id() {
        let document = bson::to_document(&sample()).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("vehicle_id").unwrap(), "ABC1234");
        assert_eq!(document.get_str("status").unwrap(), "moving");
        assert!(document.get_datetime("timestamp").is_ok());
        let location = document.get_document("location").unwrap();
        assert_eq!(location.get_str("latitude").unwrap(), "-23.55052");
    }

    #[test]
    fn stored_location_keeps_document_fields() {
        let document = sample();
        let id = ObjectId::new();
        let stored = StoredLocation::from_document(id, document.clone());

        assert_eq!(stored.id, id);
        assert_eq!(stored.vehicle_id, document.vehicle_id);
        assert_eq!(stored.location, document.location);
        assert!(!stored.differs_from(&document));
    }

    #[test]
    fn differs_from_detects_changed_body() {
        let document = sample();
        let stored = StoredLocation::from_document(ObjectId::new(), document.clone());

        let changed = LocationDocument {
            status: LocationStatus::Stopped,
            ..document
        };
        assert!(stored.differs_from(&changed));
    }
}
