//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - every store failure -> 500 (Internal Server Error)
///
/// Store failures are deliberately not distinguished at the boundary; the
/// variant only matters for logs.
///
/// # Examples
///
/// ```
/// use thyme_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::recipe_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}
