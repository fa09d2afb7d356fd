//! Reference catalogue routes.
//!
//! Catalogues are immutable snapshots loaded at startup, so every handler
//! is a clone-and-serve.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use bg3companion_domain::{
    Ability, Background, CharacterClass, EquipmentCategory, EquipmentItem, Feat, Race, Spell,
    Weapon,
};

use super::ApiError;
use crate::app::App;

pub async fn list_weapons(State(app): State<Arc<App>>) -> Json<Vec<Weapon>> {
    Json(app.reference.weapons.clone())
}

pub async fn list_spells(State(app): State<Arc<App>>) -> Json<Vec<Spell>> {
    Json(app.reference.spells.clone())
}

fn equipment(app: &App, category: EquipmentCategory) -> Json<Vec<EquipmentItem>> {
    Json(
        app.reference
            .equipment_in(category)
            .into_iter()
            .cloned()
            .collect(),
    )
}

pub async fn list_armours(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Armour)
}

pub async fn list_rings(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Ring)
}

pub async fn list_amulets(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Amulet)
}

pub async fn list_cloaks(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Cloak)
}

pub async fn list_clothing(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Clothing)
}

pub async fn list_footwears(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Footwear)
}

pub async fn list_handwears(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Handwear)
}

pub async fn list_headwears(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Headwear)
}

pub async fn list_shields(State(app): State<Arc<App>>) -> Json<Vec<EquipmentItem>> {
    equipment(&app, EquipmentCategory::Shield)
}

pub async fn list_races(State(app): State<Arc<App>>) -> Json<Vec<Race>> {
    Json(app.reference.races.clone())
}

pub async fn list_classes(State(app): State<Arc<App>>) -> Json<Vec<CharacterClass>> {
    Json(app.reference.classes.clone())
}

pub async fn list_backgrounds(State(app): State<Arc<App>>) -> Json<Vec<Background>> {
    Json(app.reference.backgrounds.clone())
}

pub async fn list_feats(State(app): State<Arc<App>>) -> Json<Vec<Feat>> {
    Json(app.reference.feats.clone())
}

pub async fn list_abilities(State(app): State<Arc<App>>) -> Json<Vec<Ability>> {
    Json(app.reference.abilities.clone())
}

pub async fn skill_catalogue(State(app): State<Arc<App>>) -> Json<Vec<String>> {
    Json(app.reference.skills.clone())
}

pub async fn role_catalogue(State(app): State<Arc<App>>) -> Json<Vec<String>> {
    Json(app.reference.roles.clone())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconResponse {
    pub name: String,
    pub path: String,
}

pub async fn icon_lookup(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<IconResponse>, ApiError> {
    let path = app.icons.lookup(&name).ok_or(ApiError::NotFound)?;
    Ok(Json(IconResponse {
        name,
        path: path.to_string(),
    }))
}
