use axum::http::StatusCode;

/// GET /status - Liveness probe.
///
/// Answers immediately without touching the store.
pub async fn status() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
