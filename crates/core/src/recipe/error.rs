use thiserror::Error;

/// A request payload that could not be decoded into a recipe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid recipe payload: {0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
