//! Background reference entity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSkill {
    pub name: String,
}

/// An origin character associated with a background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundCharacter {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundNote {
    pub note: String,
}

/// A character background from the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<BackgroundSkill>,
    #[serde(default)]
    pub characters: Vec<BackgroundCharacter>,
    #[serde(default)]
    pub notes: Vec<BackgroundNote>,
}
