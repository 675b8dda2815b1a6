use async_trait::async_trait;

use crate::recipe::Recipe;

use super::Result;

/// Persistence contract for recipes, keyed by an opaque string id.
///
/// Writes are unconditional. Existence checks on update and delete belong to
/// [`RecipeService`](crate::recipe::RecipeService), not to implementations
/// of this trait.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Provisions the backing table if it does not exist yet.
    ///
    /// An already existing table is not an error.
    async fn ensure_table(&self) -> Result<()>;

    /// Assigns a fresh id to the recipe and stores it.
    ///
    /// Any id already on `recipe` is overwritten. Returns the stored record.
    async fn save_recipe(&self, recipe: Recipe) -> Result<Recipe>;

    /// Stores `recipe` under `id`, replacing whatever was there.
    ///
    /// Creates the record when nothing was stored under `id`.
    async fn update_recipe(&self, recipe: Recipe, id: &str) -> Result<()>;

    /// Gets a recipe by its id, failing with `NotFound` when absent.
    async fn get_recipe(&self, id: &str) -> Result<Recipe>;

    /// Returns every stored recipe, in no particular order.
    async fn list_recipes(&self) -> Result<Vec<Recipe>>;

    /// Deletes a recipe by its id. Deleting a missing id succeeds.
    async fn delete_recipe(&self, id: &str) -> Result<()>;

    /// Lists the names of the tables visible to this store.
    async fn list_tables(&self) -> Result<Vec<String>>;
}
