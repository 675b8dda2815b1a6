use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::null_as_default;

/// Generates a fresh, globally unique recipe id.
pub fn new_recipe_id() -> String {
    Uuid::new_v4().to_string()
}

/// A recipe that users can create.
///
/// Every field decodes leniently: a missing key or an explicit `null` yields
/// the field's empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Server-assigned identifier. Empty until the recipe has been saved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
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
    /// Ingredient name to quantity or notes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: BTreeMap<String, String>,
    /// Preparation steps, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Creates a new, unsaved recipe with the given name and author.
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the cuisine.
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Sets the image name.
    pub fn with_image_name(mut self, image_name: impl Into<String>) -> Self {
        self.image_name = image_name.into();
        self
    }

    /// Adds an ingredient, replacing any previous quantity for that name.
    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.ingredients.insert(name.into(), quantity.into());
        self
    }

    /// Appends a preparation step.
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Sets a specific id (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe::new("Snickerdoodle Cookies", "Gran")
            .with_description("Soft cinnamon sugar cookies")
            .with_cuisine("American")
            .with_image_name("snickerdoodles.jpg")
            .with_ingredient("flour", "2 3/4 cups")
            .with_ingredient("cream of tartar", "2 tsp")
            .with_step("Cream the butter and sugar")
            .with_step("Roll in cinnamon sugar")
    }

    #[test]
    fn test_new_recipe_id_is_unique_and_non_empty() {
        let a = new_recipe_id();
        let b = new_recipe_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_new_recipe_has_no_id() {
        let recipe = Recipe::new("Roasted Carrots", "Sam");
        assert!(recipe.id.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let recipe = sample_recipe().with_id("abc");
        let json = serde_json::to_value(&recipe).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["imageName"], "snickerdoodles.jpg");
        assert_eq!(json["ingredients"]["flour"], "2 3/4 cups");
        assert_eq!(json["steps"][1], "Roll in cinnamon sugar");
        assert!(json.get("image_name").is_none());
    }

    #[test]
    fn test_deserializes_partial_payload() {
        let json = r#"{"name": "Snickerdoodle Cookies", "author": "Gran"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe, Recipe::new("Snickerdoodle Cookies", "Gran"));
    }

    #[test]
    fn test_null_ingredients_equal_empty_ingredients() {
        let with_null: Recipe =
            serde_json::from_str(r#"{"name": "Soup", "ingredients": null}"#).unwrap();
        let with_empty: Recipe =
            serde_json::from_str(r#"{"name": "Soup", "ingredients": {}}"#).unwrap();
        let without: Recipe = serde_json::from_str(r#"{"name": "Soup"}"#).unwrap();

        assert_eq!(with_null, with_empty);
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_steps_keep_their_order() {
        let json = r#"{"steps": ["third", "first", "second"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.steps, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_rejects_non_string_ingredient() {
        let json = r#"{"ingredients": {"eggs": 2}}"#;
        let result: Result<Recipe, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
