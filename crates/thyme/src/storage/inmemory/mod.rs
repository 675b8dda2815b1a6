//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `RecipeRepository`
//! that stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. It backs
//! the router tests and can serve local development without DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use thyme::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
