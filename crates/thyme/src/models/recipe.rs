use std::collections::BTreeMap;

use serde::Deserialize;

use thyme_core::recipe::Recipe;
use thyme_core::serde::null_as_default;

/// Request payload for creating or replacing a recipe.
///
/// There is no `id` field: a client-supplied id is accepted in the JSON but
/// dropped during decoding, since ids are assigned by the server on create
/// and taken from the path on update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
}

impl RecipePayload {
    /// Converts the payload into an unsaved Recipe (empty id).
    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: String::new(),
            name: self.name,
            author: self.author,
            description: self.description,
            cuisine: self.cuisine,
            image_name: self.image_name,
            ingredients: self.ingredients,
            steps: self.steps,
        }
    }
}
