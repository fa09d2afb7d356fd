//! Damage-type extraction from spells and weapons.
//!
//! Spells bury their damage types in free-text property values, so they
//! are recovered by scanning for a closed vocabulary of damage words.
//! Weapons carry an explicit type on each damage entry. Words outside the
//! vocabulary are ignored; the taxonomy is closed, not open-ended.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::entities::{Spell, Weapon};

/// The recognized damage types.
pub const DAMAGE_TYPES: [&str; 13] = [
    "Acid",
    "Bludgeoning",
    "Cold",
    "Fire",
    "Force",
    "Lightning",
    "Necrotic",
    "Piercing",
    "Poison",
    "Psychic",
    "Radiant",
    "Slashing",
    "Thunder",
];

static DAMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = DAMAGE_TYPES.join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).expect("damage pattern is valid")
});

/// Capitalize the first letter and lowercase the rest, so "FIRE" and
/// "fire" both land on "Fire".
fn normalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Damage types a spell inflicts, sorted and de-duplicated.
///
/// Only properties named "Damage" (case-insensitively) are scanned, and a
/// single property value can contribute several types ("1d6 Fire" plus
/// "1d4 Cold"). Spells with no damage property yield an empty list.
pub fn spell_damage_types(spell: &Spell) -> Vec<String> {
    let mut found: BTreeSet<String> = BTreeSet::new();
    for property in &spell.properties {
        if !property.name.eq_ignore_ascii_case("Damage") {
            continue;
        }
        for m in DAMAGE_PATTERN.find_iter(&property.value) {
            found.insert(normalize(m.as_str()));
        }
    }
    found.into_iter().collect()
}

/// Damage types a weapon inflicts, sorted and de-duplicated.
///
/// Weapons state their type explicitly per damage entry, so the field is
/// normalized directly rather than scanned for keywords.
pub fn weapon_damage_types(weapon: &Weapon) -> Vec<String> {
    let mut found: BTreeSet<String> = BTreeSet::new();
    for damage in &weapon.damages {
        if let Some(damage_type) = &damage.damage_type {
            let trimmed = damage_type.trim();
            if !trimmed.is_empty() {
                found.insert(normalize(trimmed));
            }
        }
    }
    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{SpellProperty, WeaponDamage};

    fn spell_with_properties(properties: Vec<SpellProperty>) -> Spell {
        Spell {
            name: "Test Spell".to_string(),
            level: Some("1".to_string()),
            school: None,
            description: None,
            image_path: None,
            properties,
        }
    }

    fn property(name: &str, value: &str) -> SpellProperty {
        SpellProperty {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn weapon_with_damage_types(types: &[&str]) -> Weapon {
        Weapon {
            weapon_id: "wpn_test".to_string(),
            name: "Test Blade".to_string(),
            rarity: None,
            description: None,
            quote: None,
            weight_kg: None,
            weight_lb: None,
            price: None,
            enchantment: None,
            weapon_type: None,
            range_m: None,
            range_f: None,
            attributes: None,
            image_path: None,
            damages: types
                .iter()
                .map(|t| WeaponDamage {
                    damage_dice: None,
                    damage_bonus: None,
                    damage_total_range: None,
                    modifier: None,
                    damage_type: Some(t.to_string()),
                    damage_source: None,
                })
                .collect(),
            actions: Vec::new(),
            abilities: Vec::new(),
            locations: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn extracts_multiple_types_from_one_property() {
        let spell = spell_with_properties(vec![property(
            "Damage",
            "2d6 Fire damage, plus 1d4 Cold damage",
        )]);
        assert_eq!(spell_damage_types(&spell), vec!["Cold", "Fire"]);
    }

    #[test]
    fn extraction_is_case_insensitive_and_normalized() {
        let spell = spell_with_properties(vec![property("damage", "3d8 LIGHTNING, 1d4 fire")]);
        assert_eq!(spell_damage_types(&spell), vec!["Fire", "Lightning"]);
    }

    #[test]
    fn only_damage_properties_are_scanned() {
        let spell = spell_with_properties(vec![
            property("Range", "18m of Fire-lit corridor"),
            property("Damage", "1d10 Force"),
        ]);
        assert_eq!(spell_damage_types(&spell), vec!["Force"]);
    }

    #[test]
    fn unknown_words_are_ignored() {
        let spell = spell_with_properties(vec![property("Damage", "2d6 Sonic damage")]);
        assert!(spell_damage_types(&spell).is_empty());
    }

    #[test]
    fn partial_words_do_not_match() {
        let spell = spell_with_properties(vec![property("Damage", "Firebolt-like streak")]);
        assert!(spell_damage_types(&spell).is_empty());
    }

    #[test]
    fn no_damage_property_yields_empty() {
        let spell = spell_with_properties(vec![property("Duration", "10 turns")]);
        assert!(spell_damage_types(&spell).is_empty());
    }

    #[test]
    fn weapon_types_are_deduplicated() {
        let weapon = weapon_with_damage_types(&["Slashing", "slashing", "Fire"]);
        assert_eq!(weapon_damage_types(&weapon), vec!["Fire", "Slashing"]);
    }

    #[test]
    fn weapon_without_damage_entries_yields_empty() {
        let weapon = weapon_with_damage_types(&[]);
        assert!(weapon_damage_types(&weapon).is_empty());
    }
}
