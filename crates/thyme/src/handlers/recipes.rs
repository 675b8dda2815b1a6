use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use thyme_core::recipe::{Recipe, ValidationError};

use crate::{handlers::AppError, models::RecipePayload, state::AppState};

/// Turns a body extraction failure into a 400.
fn parse_payload(
    payload: Result<Json<RecipePayload>, JsonRejection>,
) -> Result<Recipe, ValidationError> {
    payload
        .map(|Json(payload)| payload.into_recipe())
        .map_err(|rejection| ValidationError::new(rejection.body_text()))
}

/// List all recipes (GET /recipe).
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state.recipes.read_all().await?;
    Ok(Json(recipes))
}

/// Create a recipe (POST /recipe).
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = parse_payload(payload)?;
    let recipe = state.recipes.create(recipe).await?;

    tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "Created new recipe");

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get a single recipe by ID (GET /recipe/{id}).
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state.recipes.read(&id).await?;
    Ok(Json(recipe))
}

/// Replace a recipe by ID (PUT /recipe/{id}).
///
/// The body is validated before the existence check, so a malformed body
/// for a missing id is a 400.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecipePayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let recipe = parse_payload(payload)?;
    state.recipes.update(&id, recipe).await?;

    tracing::info!(recipe_id = %id, "Updated recipe");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a recipe by ID (DELETE /recipe/{id}).
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.recipes.delete(&id).await?;

    tracing::info!(recipe_id = %id, "Deleted recipe");

    Ok(StatusCode::NO_CONTENT)
}
