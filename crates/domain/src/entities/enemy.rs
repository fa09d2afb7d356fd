//! Bestiary entity - user-maintained enemy notes.

use serde::{Deserialize, Serialize};

/// An enemy entry in the player's bestiary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub id: i64,
    pub name: String,
    pub stats: Option<String>,
    pub resistances: Option<String>,
    pub weaknesses: Option<String>,
    pub abilities: Option<String>,
    pub notes: Option<String>,
}

/// Payload for creating a bestiary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnemy {
    pub name: String,
    pub stats: Option<String>,
    pub resistances: Option<String>,
    pub weaknesses: Option<String>,
    pub abilities: Option<String>,
    pub notes: Option<String>,
}

/// Partial update for a bestiary entry; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyPatch {
    pub name: Option<String>,
    pub stats: Option<String>,
    pub resistances: Option<String>,
    pub weaknesses: Option<String>,
    pub abilities: Option<String>,
    pub notes: Option<String>,
}

impl EnemyPatch {
    /// True when the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.stats.is_none()
            && self.resistances.is_none()
            && self.weaknesses.is_none()
            && self.abilities.is_none()
            && self.notes.is_none()
    }
}
