//! Recipe table layout.
//!
//! One item per recipe, keyed by the recipe id alone. No sort key and no
//! secondary indexes.

use aws_sdk_dynamodb::types::AttributeValue;

/// Partition key attribute name.
pub const ID_ATTRIBUTE: &str = "id";

pub const NAME_ATTRIBUTE: &str = "name";
pub const AUTHOR_ATTRIBUTE: &str = "author";
pub const DESCRIPTION_ATTRIBUTE: &str = "description";
pub const CUISINE_ATTRIBUTE: &str = "cuisine";
pub const IMAGE_NAME_ATTRIBUTE: &str = "imageName";
pub const INGREDIENTS_ATTRIBUTE: &str = "ingredients";
pub const STEPS_ATTRIBUTE: &str = "steps";

/// Read capacity units requested when provisioning the table.
pub const READ_CAPACITY_UNITS: i64 = 10;

/// Write capacity units requested when provisioning the table.
pub const WRITE_CAPACITY_UNITS: i64 = 10;

/// Key value for a recipe id.
pub fn recipe_key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}
