//! Ability-score reference entity.
//!
//! These are the six ability scores and their associated uses, checks,
//! skills and saving throws, as presented on the reference pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityUse {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityCheck {
    #[serde(rename = "type")]
    pub check_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySkill {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySave {
    pub description: Option<String>,
}

/// An ability score from the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    #[serde(default)]
    pub uses: Vec<AbilityUse>,
    #[serde(default)]
    pub checks: Vec<AbilityCheck>,
    #[serde(default)]
    pub skills: Vec<AbilitySkill>,
    #[serde(default)]
    pub saves: Vec<AbilitySave>,
}
