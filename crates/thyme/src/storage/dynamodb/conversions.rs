//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! recipes. These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use thyme_core::recipe::Recipe;
use thyme_core::storage::RepositoryError;

use super::schema::{
    recipe_key, AUTHOR_ATTRIBUTE, CUISINE_ATTRIBUTE, DESCRIPTION_ATTRIBUTE, ID_ATTRIBUTE,
    IMAGE_NAME_ATTRIBUTE, INGREDIENTS_ATTRIBUTE, NAME_ATTRIBUTE, STEPS_ATTRIBUTE,
};

/// Convert a Recipe to DynamoDB item.
///
/// Fails when the recipe has no id, since DynamoDB rejects empty key values.
pub fn recipe_to_item(
    recipe: &Recipe,
) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    if recipe.id.is_empty() {
        return Err(RepositoryError::Serialization(
            "Recipe id must be set before it is stored".to_string(),
        ));
    }

    let mut item = HashMap::new();

    // Key
    item.insert(ID_ATTRIBUTE.to_string(), recipe_key(&recipe.id));

    // Data
    item.insert(
        NAME_ATTRIBUTE.to_string(),
        AttributeValue::S(recipe.name.clone()),
    );
    item.insert(
        AUTHOR_ATTRIBUTE.to_string(),
        AttributeValue::S(recipe.author.clone()),
    );
    item.insert(
        DESCRIPTION_ATTRIBUTE.to_string(),
        AttributeValue::S(recipe.description.clone()),
    );
    item.insert(
        CUISINE_ATTRIBUTE.to_string(),
        AttributeValue::S(recipe.cuisine.clone()),
    );
    item.insert(
        IMAGE_NAME_ATTRIBUTE.to_string(),
        AttributeValue::S(recipe.image_name.clone()),
    );

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|(name, quantity)| (name.clone(), AttributeValue::S(quantity.clone())))
        .collect();
    item.insert(
        INGREDIENTS_ATTRIBUTE.to_string(),
        AttributeValue::M(ingredients),
    );

    let steps = recipe
        .steps
        .iter()
        .map(|step| AttributeValue::S(step.clone()))
        .collect();
    item.insert(STEPS_ATTRIBUTE.to_string(), AttributeValue::L(steps));

    Ok(item)
}

/// Convert a DynamoDB item to Recipe.
pub fn item_to_recipe(item: &HashMap<String, AttributeValue>) -> Result<Recipe, RepositoryError> {
    Ok(Recipe {
        id: get_string(item, ID_ATTRIBUTE)?,
        name: get_string_or_default(item, NAME_ATTRIBUTE)?,
        author: get_string_or_default(item, AUTHOR_ATTRIBUTE)?,
        description: get_string_or_default(item, DESCRIPTION_ATTRIBUTE)?,
        cuisine: get_string_or_default(item, CUISINE_ATTRIBUTE)?,
        image_name: get_string_or_default(item, IMAGE_NAME_ATTRIBUTE)?,
        ingredients: get_string_map(item, INGREDIENTS_ATTRIBUTE)?,
        steps: get_string_list(item, STEPS_ATTRIBUTE)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn invalid_field(key: &str) -> RepositoryError {
    RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
}

/// Get a required, non-empty string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| invalid_field(key))
}

/// Get a string attribute, treating a missing or NULL value as empty.
fn get_string_or_default(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(_) => Err(invalid_field(key)),
    }
}

/// Get a map of strings, treating a missing or NULL value as empty.
fn get_string_map(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<BTreeMap<String, String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(BTreeMap::new()),
        Some(AttributeValue::M(map)) => map
            .iter()
            .map(|(name, value)| {
                value
                    .as_s()
                    .map(|s| (name.clone(), s.clone()))
                    .map_err(|_| invalid_field(&format!("{key}.{name}")))
            })
            .collect(),
        Some(_) => Err(invalid_field(key)),
    }
}

/// Get a list of strings, treating a missing or NULL value as empty.
fn get_string_list(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Vec<String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(Vec::new()),
        Some(AttributeValue::L(list)) => list
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .as_s()
                    .cloned()
                    .map_err(|_| invalid_field(&format!("{key}[{index}]")))
            })
            .collect(),
        Some(_) => Err(invalid_field(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe::new("Snickerdoodle Cookies", "Gran")
            .with_id("550e8400-e29b-41d4-a716-446655440001")
            .with_description("Soft cinnamon sugar cookies")
            .with_cuisine("American")
            .with_image_name("snickerdoodles.jpg")
            .with_ingredient("flour", "2 3/4 cups")
            .with_ingredient("butter", "1 cup")
            .with_step("Cream the butter and sugar")
            .with_step("Roll in cinnamon sugar")
            .with_step("Bake for 10 minutes")
    }

    #[test]
    fn test_recipe_round_trip() {
        let recipe = sample_recipe();
        let item = recipe_to_item(&recipe).unwrap();
        let parsed = item_to_recipe(&item).unwrap();

        assert_eq!(recipe, parsed);
    }

    #[test]
    fn test_recipe_item_has_correct_attributes() {
        let item = recipe_to_item(&sample_recipe()).unwrap();

        assert_eq!(
            item.get("id").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(
            item.get("imageName").unwrap().as_s().unwrap(),
            "snickerdoodles.jpg"
        );
        assert_eq!(
            item.get("ingredients")
                .unwrap()
                .as_m()
                .unwrap()
                .get("flour")
                .unwrap()
                .as_s()
                .unwrap(),
            "2 3/4 cups"
        );
        assert_eq!(item.get("steps").unwrap().as_l().unwrap().len(), 3);
    }

    #[test]
    fn test_recipe_without_id_is_rejected() {
        let recipe = Recipe::new("Nameless", "Nobody");
        let result = recipe_to_item(&recipe);
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_item_with_only_id_decodes_to_empty_recipe() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc".to_string()));

        let recipe = item_to_recipe(&item).unwrap();

        assert_eq!(recipe, Recipe::default().with_id("abc"));
    }

    #[test]
    fn test_null_attributes_decode_to_defaults() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc".to_string()));
        item.insert("name".to_string(), AttributeValue::Null(true));
        item.insert("ingredients".to_string(), AttributeValue::Null(true));
        item.insert("steps".to_string(), AttributeValue::Null(true));

        let recipe = item_to_recipe(&item).unwrap();

        assert!(recipe.name.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_missing_id_is_invalid_data() {
        let mut item = HashMap::new();
        item.insert("name".to_string(), AttributeValue::S("Soup".to_string()));

        let result = item_to_recipe(&item);
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_non_string_ingredient_is_invalid_data() {
        let mut ingredients = HashMap::new();
        ingredients.insert("eggs".to_string(), AttributeValue::N("2".to_string()));

        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc".to_string()));
        item.insert("ingredients".to_string(), AttributeValue::M(ingredients));

        let result = item_to_recipe(&item);
        assert_eq!(
            result,
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: ingredients.eggs".to_string()
            ))
        );
    }

    #[test]
    fn test_steps_keep_their_order() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc".to_string()));
        item.insert(
            "steps".to_string(),
            AttributeValue::L(vec![
                AttributeValue::S("second".to_string()),
                AttributeValue::S("first".to_string()),
            ]),
        );

        let recipe = item_to_recipe(&item).unwrap();
        assert_eq!(recipe.steps, vec!["second", "first"]);
    }

    #[test]
    fn test_get_string_or_default_wrong_type() {
        let mut item = HashMap::new();
        item.insert("name".to_string(), AttributeValue::N("1".to_string()));
        assert!(get_string_or_default(&item, "name").is_err());
    }
}
