//! Wearable equipment reference entity.
//!
//! The reference data splits wearables across nine near-identical
//! databases (armours, rings, amulets, cloaks, clothing, footwear,
//! handwear, headwear, shields). They share one shape here, with the
//! category-specific columns as optionals and a category discriminant for
//! filtering.

use serde::{Deserialize, Serialize};

/// Which wearable catalogue an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentCategory {
    Armour,
    Ring,
    Amulet,
    Cloak,
    Clothing,
    Footwear,
    Handwear,
    Headwear,
    Shield,
}

impl EquipmentCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Armour => "Armour",
            Self::Ring => "Ring",
            Self::Amulet => "Amulet",
            Self::Cloak => "Cloak",
            Self::Clothing => "Clothing",
            Self::Footwear => "Footwear",
            Self::Handwear => "Handwear",
            Self::Headwear => "Headwear",
            Self::Shield => "Shield",
        }
    }
}

/// Where the item can be found in-game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentLocation {
    pub description: String,
}

/// A special effect on a wearable (condition, bonus, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSpecial {
    #[serde(rename = "type")]
    pub special_type: String,
    pub name: String,
    pub effect: String,
}

/// A wearable item from one of the equipment catalogues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub item_id: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub description: Option<String>,
    pub quote: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub rarity: Option<String>,
    pub weight_kg: Option<f64>,
    pub weight_lb: Option<f64>,
    pub price_gp: Option<f64>,
    pub image_path: Option<String>,
    /// Armour and clothing only
    pub armour_class_base: Option<i64>,
    pub armour_class_modifier: Option<String>,
    /// Shields only
    pub shield_class_base: Option<i64>,
    /// Footwear only
    pub required_proficiency: Option<String>,
    #[serde(default)]
    pub locations: Vec<EquipmentLocation>,
    #[serde(default)]
    pub specials: Vec<EquipmentSpecial>,
}
