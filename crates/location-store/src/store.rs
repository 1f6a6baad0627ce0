use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::{LocationDocument, LocationFilter, RepositoryError, Result, StoredLocation};

/// Core trait for location persistence.
///
/// Identifiers cross this boundary in their external hex-string form.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Verifies connectivity with the backing store.
    async fn ping(&self) -> Result<()>;

    /// Releases the resources held by the repository.
    async fn stop(&self);

    /// Inserts a new location and returns its assigned identifier.
    async fn insert_one(&self, location: LocationDocument) -> Result<String>;

    /// Retrieves a location by identifier.
    ///
    /// Fails with `NotFound` when the id is absent and `InvalidId` when it
    /// cannot be parsed.
    async fn get_one(&self, id: &str) -> Result<StoredLocation>;

    /// Retrieves one page of locations matching the filter.
    ///
    /// Results are returned in insertion order.
    async fn get_all(&self, filter: LocationFilter) -> Result<Vec<StoredLocation>>;

    /// Replaces the body of a location.
    ///
    /// Returns true if exactly one document was modified.
    async fn update_one(&self, id: &str, location: LocationDocument) -> Result<bool>;

    /// Deletes a location.
    ///
    /// Returns true if exactly one document was deleted.
    async fn delete_one(&self, id: &str) -> Result<bool>;
}

/// Parses an external identifier into a database object id.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}
