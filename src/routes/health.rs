use axum::Json;
use serde::Serialize;

use crate::routes::envelope::ApiResponse;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: "live-debate-backend".to_string(),
    })
}
