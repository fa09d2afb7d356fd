//! Bestiary routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bg3companion_domain::{Enemy, EnemyPatch, NewEnemy};

use super::ApiError;
use crate::app::App;

pub async fn list_enemies(State(app): State<Arc<App>>) -> Result<Json<Vec<Enemy>>, ApiError> {
    Ok(Json(app.bestiary.list().await?))
}

pub async fn create_enemy(
    State(app): State<Arc<App>>,
    Json(payload): Json<NewEnemy>,
) -> Result<(StatusCode, Json<Enemy>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Enemy name is required".to_string()));
    }
    let enemy = app.bestiary.create(payload).await?;
    Ok((StatusCode::CREATED, Json(enemy)))
}

pub async fn update_enemy(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Json(patch): Json<EnemyPatch>,
) -> Result<Json<Enemy>, ApiError> {
    Ok(Json(app.bestiary.update(id, patch).await?))
}

pub async fn delete_enemy(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app.bestiary.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
