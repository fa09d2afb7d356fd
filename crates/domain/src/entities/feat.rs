//! Feat reference entity.

use serde::{Deserialize, Serialize};

/// A selectable option within a feat (e.g. which ability score to raise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatOption {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatNote {
    pub note: String,
}

/// A feat from the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feat {
    pub name: String,
    pub description: Option<String>,
    pub prerequisite: Option<String>,
    #[serde(default)]
    pub options: Vec<FeatOption>,
    #[serde(default)]
    pub notes: Vec<FeatNote>,
}
