use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::status,
        recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe},
        tables::{init_table, list_tables},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/recipe", get(list_recipes).post(create_recipe))
        .route(
            "/recipe/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/status", get(status))
        .route("/init", post(init_table))
        .route("/table", get(list_tables))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
