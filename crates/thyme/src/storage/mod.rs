//! Storage backend implementations.
//!
//! This module provides concrete implementations of `RecipeRepository`
//! defined in `thyme_core::storage`. The backend the server runs with is
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//! - `inmemory`: in-memory backend, nothing survives a restart
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory backend is always compiled for tests.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p thyme
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p thyme --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p thyme --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

use std::sync::Arc;

use thyme_core::storage::RecipeRepository;

use crate::config::Config;

/// Builds the repository for the backend compiled into this binary.
#[cfg(feature = "dynamodb")]
pub async fn create_repository(config: &Config) -> Arc<dyn RecipeRepository> {
    Arc::new(dynamodb::DynamoDbRepository::from_config(config).await)
}

/// Builds the repository for the backend compiled into this binary.
#[cfg(all(feature = "inmemory", not(feature = "dynamodb")))]
pub async fn create_repository(_config: &Config) -> Arc<dyn RecipeRepository> {
    tracing::warn!("Using in-memory storage, recipes will not survive a restart");
    Arc::new(inmemory::InMemoryRepository::new())
}
