//! The recipe CRUD façade.
//!
//! Create, read and list pass straight through to the repository. Update and
//! delete look the record up first so that a missing id surfaces as
//! `NotFound` instead of silently creating a record (update) or silently
//! succeeding (delete).
//!
//! The lookup and the write are two separate round-trips. A concurrent
//! delete can land between them, so an update may recreate a record that was
//! just deleted, and a delete may report success for a record another
//! request already removed.

use std::sync::Arc;

use crate::storage::{RecipeRepository, Result};

use super::Recipe;

/// Stateless CRUD service over an injected [`RecipeRepository`].
#[derive(Clone)]
pub struct RecipeService {
    repo: Arc<dyn RecipeRepository>,
}

impl RecipeService {
    /// Creates a service backed by the given repository.
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self { repo }
    }

    /// Provisions the backing table. See [`RecipeRepository::ensure_table`].
    pub async fn ensure_table(&self) -> Result<()> {
        self.repo.ensure_table().await
    }

    /// Lists the tables visible to the backing store.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        self.repo.list_tables().await
    }

    /// Stores a new recipe and returns it with its assigned id.
    ///
    /// Any id on the input is discarded.
    pub async fn create(&self, mut recipe: Recipe) -> Result<Recipe> {
        recipe.id.clear();
        let saved = self.repo.save_recipe(recipe).await?;
        tracing::debug!(recipe_id = %saved.id, "Recipe created");
        Ok(saved)
    }

    /// Gets a recipe by id.
    pub async fn read(&self, id: &str) -> Result<Recipe> {
        self.repo.get_recipe(id).await
    }

    /// Lists every recipe.
    pub async fn read_all(&self) -> Result<Vec<Recipe>> {
        self.repo.list_recipes().await
    }

    /// Replaces the recipe stored under `id`.
    ///
    /// Fails with `NotFound`, and writes nothing, when `id` does not exist.
    pub async fn update(&self, id: &str, recipe: Recipe) -> Result<()> {
        self.repo.get_recipe(id).await?;
        self.repo.update_recipe(recipe, id).await?;
        tracing::debug!(recipe_id = %id, "Recipe updated");
        Ok(())
    }

    /// Deletes the recipe stored under `id`.
    ///
    /// Fails with `NotFound`, and deletes nothing, when `id` does not exist.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.get_recipe(id).await?;
        self.repo.delete_recipe(id).await?;
        tracing::debug!(recipe_id = %id, "Recipe deleted");
        Ok(())
    }
}
