//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! `RecipeRepository` using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::DynamoDbRepository;
