//! Weapon reference entity.
//!
//! Weapons carry structured damage entries with an explicit damage type,
//! unlike spells where damage is buried in property text.

use serde::{Deserialize, Serialize};

/// One damage roll a weapon deals (weapons can have several, e.g. a flame
/// blade dealing slashing plus fire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDamage {
    pub damage_dice: Option<String>,
    pub damage_bonus: Option<i64>,
    pub damage_total_range: Option<String>,
    pub modifier: Option<String>,
    pub damage_type: Option<String>,
    pub damage_source: Option<String>,
}

/// A weapon-granted action (e.g. "Pommel Strike").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAction {
    pub name: String,
    pub description: Option<String>,
}

/// A passive special ability on a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAbility {
    pub name: String,
    pub description: Option<String>,
}

/// Where the weapon can be found in-game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponLocation {
    pub description: String,
}

/// Free-form note attached to a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponNote {
    pub content: String,
}

/// A weapon from the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub weapon_id: String,
    /// Display name, unique within the catalogue
    pub name: String,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub quote: Option<String>,
    pub weight_kg: Option<f64>,
    pub weight_lb: Option<f64>,
    pub price: Option<i64>,
    pub enchantment: Option<i64>,
    #[serde(rename = "type")]
    pub weapon_type: Option<String>,
    pub range_m: Option<f64>,
    pub range_f: Option<f64>,
    pub attributes: Option<String>,
    pub image_path: Option<String>,
    #[serde(default)]
    pub damages: Vec<WeaponDamage>,
    #[serde(default)]
    pub actions: Vec<WeaponAction>,
    #[serde(default)]
    pub abilities: Vec<WeaponAbility>,
    #[serde(default)]
    pub locations: Vec<WeaponLocation>,
    #[serde(default)]
    pub notes: Vec<WeaponNote>,
}
