use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::{
    LocationDocument, LocationFilter, RepositoryError, Result, StoredLocation,
    store::{LocationRepository, parse_object_id},
};

/// In-memory location repository for testing.
///
/// Provides the same semantics as the MongoDB implementation: object ids
/// are generated on insert and listing preserves insertion order.
#[derive(Clone, Default)]
pub struct InMemoryLocationRepository {
    locations: Arc<RwLock<Vec<StoredLocation>>>,
}

impl InMemoryLocationRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored locations.
    pub async fn location_count(&self) -> usize {
        self.locations.read().await.len()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn stop(&self) {
        tracing::debug!("in-memory location repository stopped");
    }

    async fn insert_one(&self, location: LocationDocument) -> Result<String> {
        let id = ObjectId::new();
        self.locations
            .write()
            .await
            .push(StoredLocation::from_document(id, location));

        let id = id.to_hex();
        tracing::info!(%id, "document inserted");
        Ok(id)
    }

    async fn get_one(&self, id: &str) -> Result<StoredLocation> {
        let object_id = parse_object_id(id)?;
        self.locations
            .read()
            .await
            .iter()
            .find(|l| l.id == object_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn get_all(&self, filter: LocationFilter) -> Result<Vec<StoredLocation>> {
        let store = self.locations.read().await;
        let skip = usize::try_from(filter.skip()).unwrap_or(usize::MAX);
        let locations = store
            .iter()
            .filter(|l| filter.matches(l))
            .skip(skip)
            .take(filter.limit() as usize)
            .cloned()
            .collect();
        Ok(locations)
    }

    async fn update_one(&self, id: &str, location: LocationDocument) -> Result<bool> {
        let object_id = parse_object_id(id)?;
        let mut store = self.locations.write().await;

        let Some(existing) = store.iter_mut().find(|l| l.id == object_id) else {
            return Ok(false);
        };
        if !existing.differs_from(&location) {
            return Ok(false);
        }

        *existing = StoredLocation::from_document(object_id, location);
        Ok(true)
    }

    async fn delete_one(&self, id: &str) -> Result<bool> {
        let object_id = parse_object_id(id)?;
        let mut store = self.locations.write().await;

        let before = store.len();
        store.retain(|l| l.id != object_id);
        Ok(store.len() + 1 == before)
    }
}
