pub mod document;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod query;
pub mod store;

pub use document::{CoordinatesDocument, LocationDocument, StoredLocation};
pub use error::{RepositoryError, Result};
pub use memory::InMemoryLocationRepository;
pub use mongo::MongoLocationRepository;
pub use query::LocationFilter;
pub use store::{LocationRepository, parse_object_id};

pub use bson::oid::ObjectId;
