//! Party member entity - one slot in the player's roster.
//!
//! Members are created and edited by the roster editor and persisted
//! through an injected repository; the analyzer only ever reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::build::LEVEL_CAP;

/// Equipment slots a member can fill.
///
/// `BTreeMap` keys use the serialized (camelCase) names, so the slot order
/// in a serialized member is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Ranged,
    Armour,
    Headwear,
    Handwear,
    Footwear,
    Cloak,
    Amulet,
    Ring1,
    Ring2,
}

/// The slots that can hold a weapon, in display order.
pub const WEAPON_SLOTS: [EquipmentSlot; 3] = [
    EquipmentSlot::MainHand,
    EquipmentSlot::OffHand,
    EquipmentSlot::Ranged,
];

/// One member of the party roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMember {
    pub id: Uuid,
    pub name: String,
    /// Character level, clamped to the game level cap
    pub level: u8,
    pub class_name: Option<String>,
    pub subclass: Option<String>,
    pub race: Option<String>,
    pub background: Option<String>,
    /// Party role label chosen by the player (see the role catalogue)
    pub role: Option<String>,
    /// Skill names the member is proficient in
    #[serde(default)]
    pub skills: Vec<String>,
    /// Known spell names; soft references into the spell catalogue
    #[serde(default)]
    pub spells: Vec<String>,
    /// Slot -> item name; soft references into the equipment catalogues
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentSlot, String>,
}

impl PartyMember {
    /// Create a member with the given name at level 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level: 1,
            class_name: None,
            subclass: None,
            race: None,
            background: None,
            role: None,
            skills: Vec::new(),
            spells: Vec::new(),
            equipment: BTreeMap::new(),
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, LEVEL_CAP);
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_spells<I, S>(mut self, spells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spells = spells.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_equipment(mut self, slot: EquipmentSlot, item: impl Into<String>) -> Self {
        self.equipment.insert(slot, item.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_clamped_to_the_cap() {
        assert_eq!(PartyMember::new("Lae'zel").with_level(20).level, LEVEL_CAP);
        assert_eq!(PartyMember::new("Lae'zel").with_level(0).level, 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let member = PartyMember::new("Shadowheart")
            .with_class("Cleric")
            .with_equipment(EquipmentSlot::MainHand, "Mace");
        let json = serde_json::to_value(&member).expect("serializes");
        assert!(json.get("className").is_some());
        assert!(json["equipment"].get("mainHand").is_some());
    }
}
