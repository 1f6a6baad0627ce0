use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::options::{ReadPreference, SelectionCriteria};
use mongodb::{Client, Collection};

use crate::{
    LocationDocument, LocationFilter, RepositoryError, Result, StoredLocation,
    store::{LocationRepository, parse_object_id},
};

/// MongoDB-backed location repository.
///
/// Holds one long-lived client; the driver manages its own connection pool.
#[derive(Clone)]
pub struct MongoLocationRepository {
    client: Client,
    collection: Collection<LocationDocument>,
}

impl MongoLocationRepository {
    /// Creates a repository for `database.collection` from a connection string.
    ///
    /// The driver connects lazily; call [`LocationRepository::ping`] to
    /// verify the server is reachable.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client.database(database).collection(collection);
        Ok(Self { client, collection })
    }

    fn stored(&self) -> Collection<StoredLocation> {
        self.collection.clone_with_type()
    }
}

#[async_trait]
impl LocationRepository for MongoLocationRepository {
    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
            .await?;

        tracing::info!("mongodb connection established");
        Ok(())
    }

    async fn stop(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("mongodb client shut down");
    }

    async fn insert_one(&self, location: LocationDocument) -> Result<String> {
        let result = self.collection.insert_one(&location).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| RepositoryError::UnexpectedId(result.inserted_id.to_string()))?;

        tracing::info!(%id, "document inserted");
        Ok(id)
    }

    async fn get_one(&self, id: &str) -> Result<StoredLocation> {
        let object_id = parse_object_id(id)?;
        self.stored()
            .find_one(doc! { "_id": object_id })
            .await?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn get_all(&self, filter: LocationFilter) -> Result<Vec<StoredLocation>> {
        let cursor = self
            .stored()
            .find(filter.to_document())
            .sort(doc! { "_id": 1 })
            .skip(filter.skip())
            .limit(i64::from(filter.limit()))
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update_one(&self, id: &str, location: LocationDocument) -> Result<bool> {
        let object_id = parse_object_id(id)?;
        let body = bson::to_document(&location)?;

        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": body })
            .await?;

        Ok(result.modified_count == 1)
    }

    async fn delete_one(&self, id: &str) -> Result<bool> {
        let object_id = parse_object_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await?;

        Ok(result.deleted_count == 1)
    }
}
