//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use thyme_core::recipe::{new_recipe_id, Recipe};
use thyme_core::storage::{RecipeRepository, RepositoryError, Result};

/// Name reported by [`RecipeRepository::list_tables`].
const TABLE_NAME: &str = "recipe";

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access and
/// mirrors the DynamoDB backend's unconditional write semantics. Data is not
/// persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    recipes: Arc<RwLock<HashMap<String, Recipe>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            recipes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn ensure_table(&self) -> Result<()> {
        Ok(())
    }

    async fn save_recipe(&self, mut recipe: Recipe) -> Result<Recipe> {
        recipe.id = new_recipe_id();
        let mut recipes = self.recipes.write().await;
        recipes.insert(recipe.id.clone(), recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, mut recipe: Recipe, id: &str) -> Result<()> {
        recipe.id = id.to_string();
        let mut recipes = self.recipes.write().await;
        recipes.insert(recipe.id.clone(), recipe);
        Ok(())
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        let recipes = self.recipes.read().await;
        recipes
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::recipe_not_found(id))
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.values().cloned().collect())
    }

    async fn delete_recipe(&self, id: &str) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        recipes.remove(id);
        Ok(())
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(vec![TABLE_NAME.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_fresh_id() {
        let repo = InMemoryRepository::new();
        let recipe = Recipe::new("Snickerdoodle Cookies", "Gran").with_id("client-id");

        let saved = repo.save_recipe(recipe).await.unwrap();

        assert!(!saved.id.is_empty());
        assert_ne!(saved.id, "client-id");
        assert_eq!(repo.get_recipe(&saved.id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_save_twice_yields_distinct_ids() {
        let repo = InMemoryRepository::new();
        let recipe = Recipe::new("Roasted Carrots", "Sam Lichlyter");

        let first = repo.save_recipe(recipe.clone()).await.unwrap();
        let second = repo.save_recipe(recipe).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.list_recipes().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_recipe("1234").await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_overwrites_id_with_key() {
        let repo = InMemoryRepository::new();
        let saved = repo
            .save_recipe(Recipe::new("Butternut Squash Soup", "Aleksa Wood"))
            .await
            .unwrap();

        let replacement =
            Recipe::new("Better Butternut Squash Soup", "Aleksa Wood").with_id("bogus");
        repo.update_recipe(replacement, &saved.id).await.unwrap();

        let retrieved = repo.get_recipe(&saved.id).await.unwrap();
        assert_eq!(retrieved.id, saved.id);
        assert_eq!(retrieved.name, "Better Butternut Squash Soup");
        assert!(repo.get_recipe("bogus").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_nonexistent_creates_record() {
        let repo = InMemoryRepository::new();

        repo.update_recipe(Recipe::new("Steak", "Sam"), "fresh-id")
            .await
            .unwrap();

        assert_eq!(repo.get_recipe("fresh-id").await.unwrap().name, "Steak");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let saved = repo.save_recipe(Recipe::new("Steak", "Sam")).await.unwrap();

        repo.delete_recipe(&saved.id).await.unwrap();

        assert!(repo.get_recipe(&saved.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_succeeds() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete_recipe("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_tables_and_ensure_table() {
        let repo = InMemoryRepository::new();
        repo.ensure_table().await.unwrap();
        repo.ensure_table().await.unwrap();
        assert_eq!(repo.list_tables().await.unwrap(), vec!["recipe".to_string()]);
    }
}
