//! Location use cases.

use location_store::LocationRepository;

use crate::error::DomainError;

use super::{Location, LocationInput, LocationPage, LocationQuery};

/// Service orchestrating location use cases over a repository.
///
/// Each operation translates between the entity and storage shapes and
/// makes a single repository call. Repository errors are returned as-is.
pub struct LocationService<R: LocationRepository> {
    repository: R,
}

impl<R: LocationRepository> LocationService<R> {
    /// Creates a new location service with the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Records a new location and returns it with its assigned id.
    #[tracing::instrument(skip(self, input), fields(vehicle_id = %input.vehicle_id))]
    pub async fn create(&self, input: LocationInput) -> Result<Location, DomainError> {
        let location = Location::new(input);
        let id = self.repository.insert_one(location.to_document()).await?;

        metrics::counter!("locations_created_total").increment(1);
        Ok(location.persisted(id))
    }

    /// Loads a location by id.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Location, DomainError> {
        let stored = self.repository.get_one(id).await?;
        Ok(Location::from(stored))
    }

    /// Lists one page of locations matching the query.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: LocationQuery) -> Result<LocationPage, DomainError> {
        let stored = self.repository.get_all(query.to_filter()).await?;
        Ok(LocationPage::from_stored(stored, query.pagination))
    }

    /// Replaces a location with new input.
    ///
    /// Returns false if no location was modified.
    #[tracing::instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: LocationInput) -> Result<bool, DomainError> {
        let location = Location::new(input);
        let updated = self
            .repository
            .update_one(id, location.to_document())
            .await?;

        if updated {
            metrics::counter!("locations_updated_total").increment(1);
        }
        Ok(updated)
    }

    /// Deletes a location.
    ///
    /// Returns false if no location was deleted.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let deleted = self.repository.delete_one(id).await?;

        if deleted {
            metrics::counter!("locations_deleted_total").increment(1);
        }
        Ok(deleted)
    }
}
