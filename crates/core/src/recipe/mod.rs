mod error;
mod service;
mod types;

pub use error::ValidationError;
pub use service::RecipeService;
pub use types::{new_recipe_id, Recipe};
