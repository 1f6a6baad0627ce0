//! List filters and result pages.

use common::{LocationStatus, Pagination};
use location_store::{LocationFilter, StoredLocation};

use super::Location;

/// Filter for listing locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationQuery {
    pub vehicle_id: Option<String>,
    pub status: Option<LocationStatus>,
    pub pagination: Pagination,
}

impl LocationQuery {
    /// Creates a query for the first page of all locations.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle_id(mut self, vehicle_id: impl Into<String>) -> Self {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    pub fn status(mut self, status: LocationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn page(mut self, page: Option<u32>, limit: Option<u32>) -> Self {
        self.pagination = Pagination::new(page, limit);
        self
    }

    /// Translates the query into the storage filter.
    pub fn to_filter(&self) -> LocationFilter {
        LocationFilter {
            vehicle_id: self.vehicle_id.clone(),
            status: self.status,
            pagination: self.pagination,
        }
    }
}

/// One page of locations.
///
/// `success` is true iff the page holds at least one location. No total
/// count is computed; the pagination echoes the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPage {
    pub success: bool,
    pub locations: Vec<Location>,
    pub pagination: Pagination,
}

impl LocationPage {
    pub fn from_stored(stored: Vec<StoredLocation>, pagination: Pagination) -> Self {
        let locations: Vec<Location> = stored.into_iter().map(Location::from).collect();
        Self {
            success: !locations.is_empty(),
            locations,
            pagination,
        }
    }
}
