//! Character class reference entity.
//!
//! Classes carry their subclasses, the full per-level progression table
//! (with every class-specific resource column the game tracks), and the
//! spells each class learns per level.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubclassFeature {
    pub level: i64,
    pub feature_name: String,
    pub feature_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subclass {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<SubclassFeature>,
}

/// One row of a class progression table.
///
/// The resource columns are sparse: each class fills only the ones that
/// apply to it (rage for barbarians, ki for monks, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProgressionEntry {
    pub level: i64,
    pub proficiency_bonus: Option<String>,
    pub features: Option<String>,
    pub rage_charges: Option<i64>,
    pub rage_damage: Option<i64>,
    pub cantrips_known: Option<i64>,
    pub spells_known: Option<i64>,
    pub spell_slots_1st: Option<i64>,
    pub spell_slots_2nd: Option<i64>,
    pub spell_slots_3rd: Option<i64>,
    pub spell_slots_4th: Option<i64>,
    pub spell_slots_5th: Option<i64>,
    pub spell_slots_6th: Option<i64>,
    pub sorcery_points: Option<i64>,
    pub sneak_attack_damage: Option<String>,
    pub bardic_inspiration_charges: Option<i64>,
    pub channel_divinity_charges: Option<i64>,
    pub lay_on_hands_charges: Option<i64>,
    pub ki_points: Option<i64>,
    pub unarmoured_movement_bonus: Option<String>,
    pub martial_arts_damage: Option<String>,
    pub spell_slots_per_level: Option<String>,
    pub invocations_known: Option<i64>,
}

/// Spells a class learns at a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSpellList {
    pub level: i64,
    pub spells: Vec<String>,
}

/// A character class from the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub name: String,
    pub description: Option<String>,
    pub hit_points_at_level1: Option<String>,
    pub hit_points_on_level_up: Option<String>,
    pub key_abilities: Option<String>,
    pub saving_throw_proficiencies: Option<String>,
    pub equipment_proficiencies: Option<String>,
    pub skill_proficiencies: Option<String>,
    pub spellcasting_ability: Option<String>,
    pub starting_equipment: Option<String>,
    #[serde(default)]
    pub subclasses: Vec<Subclass>,
    /// Sorted by level ascending
    #[serde(default)]
    pub progression: Vec<ClassProgressionEntry>,
    /// Sorted by level ascending, spell names sorted within each level
    #[serde(default)]
    pub spells_learned: Vec<ClassSpellList>,
}
