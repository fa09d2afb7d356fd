//! Build planner routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bg3companion_domain::{Build, NewBuild};

use super::ApiError;
use crate::app::App;

pub async fn list_builds(State(app): State<Arc<App>>) -> Result<Json<Vec<Build>>, ApiError> {
    Ok(Json(app.builds.list().await?))
}

pub async fn get_build(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<Json<Build>, ApiError> {
    Ok(Json(app.builds.get(id).await?))
}

pub async fn create_build(
    State(app): State<Arc<App>>,
    Json(payload): Json<NewBuild>,
) -> Result<(StatusCode, Json<Build>), ApiError> {
    let payload = payload.validate()?;
    let build = app.builds.create(payload).await?;
    Ok((StatusCode::CREATED, Json(build)))
}

/// Replace a build and its level plan.
pub async fn update_build(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Json(payload): Json<NewBuild>,
) -> Result<Json<Build>, ApiError> {
    let payload = payload.validate()?;
    Ok(Json(app.builds.update(id, payload).await?))
}

pub async fn delete_build(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app.builds.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
