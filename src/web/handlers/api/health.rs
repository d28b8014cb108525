//! 健康检查

use axum::response::Json;

use crate::web::types::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
