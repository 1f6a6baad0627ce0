use thiserror::Error;

/// Errors that can occur when interacting with the location store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No document exists with the given identifier.
    #[error("Location not found: {0}")]
    NotFound(String),

    /// The identifier is not a valid document id.
    #[error("Invalid location id: {0}")]
    InvalidId(String),

    /// The database returned an insert id that is not an ObjectId.
    #[error("Unexpected inserted id: {0}")]
    UnexpectedId(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A document could not be converted to BSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),
}

impl RepositoryError {
    /// Returns true when the identifier did not resolve to a document,
    /// either because it is absent or because it is malformed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidId(_))
    }

    /// The identifier the error refers to, if any.
    pub fn location_id(&self) -> Option<&str> {
        match self {
            Self::NotFound(id) | Self::InvalidId(id) => Some(id),
            _ => None,
        }
    }
}

/// Result type for location store operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
