use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: &'static str,
}

pub async fn check() -> Json<HealthCheckResponse> {
    let response = HealthCheckResponse { status: "SERVING" };
    tracing::debug!(?response, "health_check response");
    Json(response)
}
