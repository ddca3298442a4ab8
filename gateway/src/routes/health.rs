use axum::Json;
use primitives::api::HealthResponse;

/// `GET /api/health`
///
/// Liveness probe, the document store is not checked.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok("Server is running"))
}
