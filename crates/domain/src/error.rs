//! Domain error types.

use location_store::RepositoryError;
use thiserror::Error;

/// Errors that can occur during location use cases.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the location repository.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Returns true when the requested location does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            DomainError::Repository(err) => err.is_not_found(),
        }
    }
}
