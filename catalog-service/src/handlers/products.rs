use crate::models::Product;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;

pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Response, AppError> {
    match state.catalog.get_product(&item_id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// The body is read raw and parsed here so that a missing or unparsable
/// payload short-circuits before the catalog is ever invoked.
pub async fn add_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let product: Product = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedPayload(anyhow::anyhow!("invalid product payload: {}", e)))?;

    let item_id = state.catalog.add_product(product).await?;
    tracing::info!(item_id = %item_id, "product stored");

    Ok(StatusCode::CREATED)
}
