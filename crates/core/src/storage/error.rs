use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// `NotFound` is the only variant callers are expected to branch on. The
/// remaining variants all describe a failure of the underlying store and
/// exist to keep log messages specific.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing recipe.
    pub fn recipe_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recipe",
            id: id.into(),
        }
    }

    /// Returns true when the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
