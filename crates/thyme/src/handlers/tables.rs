//! Store administration endpoints.

use axum::{extract::State, Json};

use crate::{handlers::AppError, state::AppState};

/// Create the recipe table if it is missing (POST /init).
pub async fn init_table(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.recipes.ensure_table().await?;
    tracing::info!("Recipe table ready");
    Ok("OK")
}

/// List the table names visible to the store client (GET /table).
pub async fn list_tables(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let tables = state.recipes.list_tables().await?;
    Ok(Json(tables))
}
