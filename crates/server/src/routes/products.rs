use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::product_management::{Product, ProductListItem, UpdateProductRequest};
use tracing::info;

use super::{created, ensure_id, validated, ListQuery};
use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProductListItem>>, JsonApiError> {
    let window = query.window()?;
    Ok(Json(state.products.list(window).await?))
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Product>, JsonApiError> {
    ensure_id(id)?;
    Ok(Json(state.products.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let request = validated(payload)?;
    let product = state.products.create(&request).await?;
    info!(product_id = product.id, category_id = product.category_id, "product_created");
    Ok(created(format!("/api/products/{}", product.id), product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    let request = validated(payload)?;
    state.products.update(id, &request).await?;
    info!(product_id = id, "product_updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_status(
    State(state): State<AppState>,
    Path((id, deleted)): Path<(i32, bool)>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.products.set_status(id, deleted).await?;
    info!(product_id = id, deleted, "product_status_changed");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.products.delete(id).await?;
    info!(product_id = id, "product_purged");
    Ok(StatusCode::NO_CONTENT)
}
