//! HTTP API.

pub mod bestiary;
pub mod builds;
pub mod loot;
pub mod party;
pub mod reference;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        // Companion tables
        .route("/api/loot", get(loot::list_loot).post(loot::create_loot_item))
        .route(
            "/api/loot/{id}",
            put(loot::update_loot_item).delete(loot::delete_loot_item),
        )
        .route("/api/builds", get(builds::list_builds).post(builds::create_build))
        .route(
            "/api/builds/{id}",
            get(builds::get_build)
                .put(builds::update_build)
                .delete(builds::delete_build),
        )
        .route(
            "/api/bestiary",
            get(bestiary::list_enemies).post(bestiary::create_enemy),
        )
        .route(
            "/api/bestiary/{id}",
            put(bestiary::update_enemy).delete(bestiary::delete_enemy),
        )
        // Party roster and analysis
        .route("/api/party", get(party::get_roster).put(party::save_roster))
        .route(
            "/api/party/metrics",
            get(party::stored_roster_metrics).post(party::roster_metrics),
        )
        .route("/api/party/export", post(party::export_metrics))
        // Reference catalogues
        .route("/api/weapons", get(reference::list_weapons))
        .route("/api/spells", get(reference::list_spells))
        .route("/api/armours", get(reference::list_armours))
        .route("/api/rings", get(reference::list_rings))
        .route("/api/amulets", get(reference::list_amulets))
        .route("/api/cloaks", get(reference::list_cloaks))
        .route("/api/clothing", get(reference::list_clothing))
        .route("/api/footwears", get(reference::list_footwears))
        .route("/api/handwears", get(reference::list_handwears))
        .route("/api/headwears", get(reference::list_headwears))
        .route("/api/shields", get(reference::list_shields))
        .route("/api/races", get(reference::list_races))
        .route("/api/classes", get(reference::list_classes))
        .route("/api/backgrounds", get(reference::list_backgrounds))
        .route("/api/feats", get(reference::list_feats))
        .route("/api/abilities", get(reference::list_abilities))
        .route("/api/catalogues/skills", get(reference::skill_catalogue))
        .route("/api/catalogues/roles", get(reference::role_catalogue))
        .route("/api/icons/{name}", get(reference::icon_lookup))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<crate::infrastructure::ports::RepoError> for ApiError {
    fn from(e: crate::infrastructure::ports::RepoError) -> Self {
        match e {
            crate::infrastructure::ports::RepoError::NotFound => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<bg3companion_domain::DomainError> for ApiError {
    fn from(e: bg3companion_domain::DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
