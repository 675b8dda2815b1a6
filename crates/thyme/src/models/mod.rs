mod recipe;

pub use recipe::RecipePayload;
