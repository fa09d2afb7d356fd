//! Loot checklist routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bg3companion_domain::{LootItem, LootItemPatch, NewLootItem};

use super::ApiError;
use crate::app::App;

pub async fn list_loot(State(app): State<Arc<App>>) -> Result<Json<Vec<LootItem>>, ApiError> {
    Ok(Json(app.loot.list().await?))
}

pub async fn create_loot_item(
    State(app): State<Arc<App>>,
    Json(payload): Json<NewLootItem>,
) -> Result<(StatusCode, Json<LootItem>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Loot item name is required".to_string()));
    }
    let item = app.loot.create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_loot_item(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Json(patch): Json<LootItemPatch>,
) -> Result<Json<LootItem>, ApiError> {
    Ok(Json(app.loot.update(id, patch).await?))
}

pub async fn delete_loot_item(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app.loot.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
