use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

/// Process-up probe; does not consult the catalog.
pub async fn readiness_check() -> impl IntoResponse {
    "OK"
}

pub async fn liveness_check(State(state): State<AppState>) -> impl IntoResponse {
    let verdict = state.health.check(Arc::clone(&state.catalog)).await;

    if verdict.is_ok() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "catalog-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        )
    } else {
        tracing::warn!(?verdict, "liveness probe failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "ko",
                "service": "catalog-service"
            })),
        )
    }
}
