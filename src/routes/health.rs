use axum::Json;
use serde::Serialize;

pub const HEALTH_STATUS: &str = "AI Engine Running";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health: liveness probe with a fixed body.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
    })
}
