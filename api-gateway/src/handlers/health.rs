use axum::response::Json;
use pageview_shared::HealthResponse;

/// GET /health
///
/// Liveness probe. Takes no input and always answers 200 with the same body.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
