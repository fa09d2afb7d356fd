//! Loot checklist entity.

use serde::{Deserialize, Serialize};

/// An item on the player's loot checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub is_collected: bool,
}

/// Payload for creating a loot item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLootItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_collected: bool,
}

/// Partial update for a loot item; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootItemPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub is_collected: Option<bool>,
}

impl LootItemPatch {
    /// True when the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.item_type.is_none()
            && self.region.is_none()
            && self.description.is_none()
            && self.is_collected.is_none()
    }
}
