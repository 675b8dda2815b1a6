use std::sync::Arc;

use thyme_core::{recipe::RecipeService, storage::RecipeRepository};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub recipes: RecipeService,
}

impl AppState {
    /// Creates state backed by the given repository.
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self {
            recipes: RecipeService::new(repo),
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::inmemory::InMemoryRepository::new()))
    }
}
