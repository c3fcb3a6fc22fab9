use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::product_management::{
    ProductCategory, ProductCategoryListItem, ProductCategoryProductListItem, UpdateProductCategoryRequest,
};
use tracing::info;

use super::{created, ensure_id, validated, ListQuery};
use crate::errors::JsonApiError;
use crate::state::AppState;

/// Paged by `start` / `amount` (defaults 0 / 100).
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProductCategoryListItem>>, JsonApiError> {
    let window = query.window()?;
    Ok(Json(state.categories.list(window).await?))
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<ProductCategory>, JsonApiError> {
    ensure_id(id)?;
    Ok(Json(state.categories.get(id).await?))
}

pub async fn list_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ProductCategoryProductListItem>>, JsonApiError> {
    ensure_id(id)?;
    Ok(Json(state.products.list_for_category(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<UpdateProductCategoryRequest>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let request = validated(payload)?;
    let category = state.categories.create(&request).await?;
    info!(category_id = category.id, code = %category.code, "product_category_created");
    Ok(created(format!("/api/categories/{}", category.id), category))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateProductCategoryRequest>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    let request = validated(payload)?;
    state.categories.update(id, &request).await?;
    info!(category_id = id, "product_category_updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_status(
    State(state): State<AppState>,
    Path((id, deleted)): Path<(i32, bool)>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.categories.set_status(id, deleted).await?;
    info!(category_id = id, deleted, "product_category_status_changed");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.categories.delete(id).await?;
    info!(category_id = id, "product_category_purged");
    Ok(StatusCode::NO_CONTENT)
}
