use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::hive_management::{HiveSection, HiveSectionListItem, UpdateHiveSectionRequest};
use tracing::info;

use super::{created, ensure_id, validated};
use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<HiveSectionListItem>>, JsonApiError> {
    Ok(Json(state.sections.list().await?))
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<HiveSection>, JsonApiError> {
    ensure_id(id)?;
    Ok(Json(state.sections.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<UpdateHiveSectionRequest>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let request = validated(payload)?;
    let section = state.sections.create(&request).await?;
    info!(section_id = section.id, hive_id = section.hive_id, "hive_section_created");
    Ok(created(format!("/api/sections/{}", section.id), section))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateHiveSectionRequest>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    let request = validated(payload)?;
    state.sections.update(id, &request).await?;
    info!(section_id = id, "hive_section_updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_status(
    State(state): State<AppState>,
    Path((id, deleted)): Path<(i32, bool)>,
) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.sections.set_status(id, deleted).await?;
    info!(section_id = id, deleted, "hive_section_status_changed");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    ensure_id(id)?;
    state.sections.delete(id).await?;
    info!(section_id = id, "hive_section_purged");
    Ok(StatusCode::NO_CONTENT)
}
