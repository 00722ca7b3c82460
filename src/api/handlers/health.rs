/*
 * Responsibility
 * - GET /health (疎通用)
 * - 状態も I/O も持たないので失敗しない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::health::HealthResponse;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::OK))
}
