//! Build entity - a planned multi-level character progression.

use serde::{Deserialize, Serialize};

use crate::common::dedupe_case_insensitive;
use crate::error::DomainError;

/// The game's character level cap.
pub const LEVEL_CAP: u8 = 12;

/// The choices made at one level of a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildLevel {
    pub id: Option<i64>,
    pub level: u8,
    #[serde(default)]
    pub spells: String,
    #[serde(default)]
    pub feats: String,
    #[serde(default)]
    pub subclass_choice: String,
    #[serde(default)]
    pub multiclass_choice: String,
    #[serde(default)]
    pub note: String,
}

/// A saved character build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: i64,
    pub name: String,
    pub race: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub subclass: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub skill_choices: Vec<String>,
    #[serde(default)]
    pub levels: Vec<BuildLevel>,
}

/// One level row in a create/update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBuildLevel {
    pub level: u8,
    #[serde(default)]
    pub spells: String,
    #[serde(default)]
    pub feats: String,
    #[serde(default)]
    pub subclass_choice: String,
    #[serde(default)]
    pub multiclass_choice: String,
    #[serde(default)]
    pub note: String,
}

/// Payload for creating or replacing a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBuild {
    pub name: String,
    pub race: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub subclass: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub skill_choices: Vec<String>,
    #[serde(default)]
    pub levels: Vec<NewBuildLevel>,
}

impl NewBuild {
    /// Validate level bounds and normalize skill choices.
    ///
    /// Level rows must fall inside `1..=LEVEL_CAP`. Skill choices are
    /// de-duplicated case-insensitively, keeping the first spelling.
    pub fn validate(mut self) -> Result<Self, DomainError> {
        for row in &self.levels {
            if row.level < 1 || row.level > LEVEL_CAP {
                return Err(DomainError::validation(format!(
                    "Build level {} is outside 1..={}",
                    row.level, LEVEL_CAP
                )));
            }
        }
        self.skill_choices = dedupe_case_insensitive(&self.skill_choices);
        Ok(self)
    }
}

/// Normalize a stored skill-choice list (deserialized from older rows that
/// may contain duplicates or blank entries).
pub fn normalize_skill_choices<I, S>(choices: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedupe_case_insensitive(choices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(levels: Vec<NewBuildLevel>) -> NewBuild {
        NewBuild {
            name: "Sword Bard".to_string(),
            race: Some("Half-Elf".to_string()),
            class_name: Some("Bard".to_string()),
            subclass: Some("College of Swords".to_string()),
            notes: None,
            skill_choices: vec![
                "Stealth".to_string(),
                "stealth".to_string(),
                "Persuasion".to_string(),
            ],
            levels,
        }
    }

    fn level(level: u8) -> NewBuildLevel {
        NewBuildLevel {
            level,
            spells: String::new(),
            feats: String::new(),
            subclass_choice: String::new(),
            multiclass_choice: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn validation_normalizes_skill_choices() {
        let build = payload(vec![level(1), level(2)]).validate().expect("valid");
        assert_eq!(build.skill_choices, vec!["Stealth", "Persuasion"]);
    }

    #[test]
    fn validation_rejects_levels_past_the_cap() {
        let err = payload(vec![level(13)]).validate().expect_err("level 13");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validation_rejects_level_zero() {
        assert!(payload(vec![level(0)]).validate().is_err());
    }
}
