//! Spell reference entity.
//!
//! Spells come out of the reference database as a name, a free-form level
//! label, a description, and a bag of named properties. Damage information
//! for offensive spells is embedded in property values (see
//! [`crate::party::spell_damage_types`]); the school is not stored at all
//! and is inferred from the description text.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// A named property attached to a spell (e.g. "Damage", "Range", "Save").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellProperty {
    pub name: String,
    pub value: String,
}

/// A spell from the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    /// Display name, unique within the catalogue
    pub name: String,
    /// Free-form level label as stored ("Cantrip", "1", "Level 2", ...)
    pub level: Option<String>,
    /// School of magic inferred from the description
    pub school: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    #[serde(default)]
    pub properties: Vec<SpellProperty>,
}

impl Spell {
    /// The normalized level, if the label is recognizable.
    pub fn spell_level(&self) -> Option<SpellLevel> {
        self.level.as_deref().and_then(SpellLevel::parse)
    }
}

/// Spell level representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpellLevel {
    /// Cantrip (level 0 spell, can be cast at will)
    Cantrip,
    /// Leveled spell (1-6 in this game)
    Level(u8),
}

impl SpellLevel {
    /// Parse a free-form level label. Accepts "cantrip" in any casing, a
    /// bare number, or a "Level N" prefix form; level 0 normalizes to
    /// cantrip.
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("cantrip") {
            return Some(SpellLevel::Cantrip);
        }
        let digits = trimmed
            .strip_prefix("Level")
            .or_else(|| trimmed.strip_prefix("level"))
            .unwrap_or(trimmed)
            .trim();
        match digits.parse::<u8>() {
            Ok(0) => Some(SpellLevel::Cantrip),
            Ok(n) => Some(SpellLevel::Level(n)),
            Err(_) => None,
        }
    }

    /// Convert to numeric level (cantrip = 0).
    pub fn as_number(&self) -> u8 {
        match self {
            SpellLevel::Cantrip => 0,
            SpellLevel::Level(n) => *n,
        }
    }

    /// Check if this is a cantrip.
    pub fn is_cantrip(&self) -> bool {
        matches!(self, SpellLevel::Cantrip)
    }
}

const SCHOOLS: [&str; 8] = [
    "Abjuration",
    "Conjuration",
    "Divination",
    "Enchantment",
    "Evocation",
    "Illusion",
    "Necromancy",
    "Transmutation",
];

static SCHOOL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = SCHOOLS.join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).expect("school pattern is valid")
});

/// Infer the school of magic from a spell description.
///
/// The reference data mentions the school in prose ("... this evocation
/// wreathes the target in flame"); the first recognized school keyword
/// wins. Returns `None` when no school is mentioned.
pub fn infer_school(description: &str) -> Option<&'static str> {
    let found = SCHOOL_PATTERN.find(description)?;
    let lower = found.as_str().to_lowercase();
    SCHOOLS
        .iter()
        .find(|school| school.to_lowercase() == lower)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cantrip_labels() {
        assert_eq!(SpellLevel::parse("Cantrip"), Some(SpellLevel::Cantrip));
        assert_eq!(SpellLevel::parse("cantrip"), Some(SpellLevel::Cantrip));
        assert_eq!(SpellLevel::parse("0"), Some(SpellLevel::Cantrip));
    }

    #[test]
    fn parses_numeric_labels() {
        assert_eq!(SpellLevel::parse("3"), Some(SpellLevel::Level(3)));
        assert_eq!(SpellLevel::parse(" Level 2 "), Some(SpellLevel::Level(2)));
        assert_eq!(SpellLevel::parse("sixth"), None);
    }

    #[test]
    fn cantrip_is_level_zero() {
        assert_eq!(SpellLevel::Cantrip.as_number(), 0);
        assert!(SpellLevel::Cantrip.is_cantrip());
        assert!(!SpellLevel::Level(1).is_cantrip());
    }

    #[test]
    fn infers_school_from_prose() {
        assert_eq!(
            infer_school("A classic evocation that hurls a mote of fire."),
            Some("Evocation")
        );
        assert_eq!(
            infer_school("NECROMANCY at its most direct."),
            Some("Necromancy")
        );
        assert_eq!(infer_school("Hits things with a stick."), None);
    }

    #[test]
    fn school_keyword_must_be_whole_word() {
        assert_eq!(infer_school("An illusionist's trick."), None);
    }
}
