use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::hive_management::{Hive, HiveListItem, HiveSectionListItem, UpdateHiveRequest};
use tracing::info;

use super::{created, ensure_id, validated};
use crate::errors::JsonApiError;
use crate::state::AppState;

/// All hives, deleted ones included.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<HiveListItem>>, JsonApiError> {
    Ok(Json(state.hives.list().await?))
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Hive>, JsonApiError> {
    ensure_id(id)?;
    Ok(Json(state.hives.get(id).await?))
}

pub async fn list_sections(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<HiveSectionListItem>>, JsonApiError> {
    ensure_id(id)?;
    Ok(Json(state.sections.list_for_hive(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<UpdateHiveRequest>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let request = validated(payload)?;
    let hive = state.hives.create(&request).await?;
    info!(hive_id = hive.id, code = %hive.code, "hive_created");
    Ok(created(format!("/api/hives/{}", hive.id), hive))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateHiveRequest>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    let request = validated(payload)?;
    state.hives.update(id, &request).await?;
    info!(hive_id = id, "hive_updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_status(
    State(state): State<AppState>,
    Path((id, deleted)): Path<(i32, bool)>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.hives.set_status(id, deleted).await?;
    info!(hive_id = id, deleted, "hive_status_changed");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.hives.delete(id).await?;
    info!(hive_id = id, "hive_purged");
    Ok(StatusCode::NO_CONTENT)
}
