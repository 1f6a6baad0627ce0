use bson::{Document, doc};
use common::{LocationStatus, Pagination};

use crate::StoredLocation;

/// Storage-level filter for listing locations.
///
/// Equality predicates are optional; pagination is always applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    /// Only return locations for this vehicle.
    pub vehicle_id: Option<String>,

    /// Only return locations with this status.
    pub status: Option<LocationStatus>,

    /// Page window to return.
    pub pagination: Pagination,
}

impl LocationFilter {
    /// Creates a filter matching every location, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by vehicle id.
    pub fn vehicle_id(mut self, vehicle_id: impl Into<String>) -> Self {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    /// Filters by status.
    pub fn status(mut self, status: LocationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the page window.
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Number of documents to skip.
    pub fn skip(&self) -> u64 {
        self.pagination.skip()
    }

    /// Maximum number of documents to return.
    pub fn limit(&self) -> u32 {
        self.pagination.limit()
    }

    /// Builds the database query document for the equality predicates.
    pub fn to_document(&self) -> Document {
        let mut query = doc! {};
        if let Some(ref vehicle_id) = self.vehicle_id {
            query.insert("vehicle_id", vehicle_id.as_str());
        }
        if let Some(status) = self.status {
            query.insert("status", status.as_str());
        }
        query
    }

    /// Evaluates the equality predicates against a stored location.
    pub fn matches(&self, location: &StoredLocation) -> bool {
        if let Some(ref vehicle_id) = self.vehicle_id
            && &location.vehicle_id != vehicle_id
        {
            return false;
        }
        if let Some(status) = self.status
            && location.status != status
        {
            return false;
        }
        true
    }
}
