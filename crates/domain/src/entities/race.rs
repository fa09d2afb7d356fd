//! Race reference entity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceFeature {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubraceFeature {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subrace {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<SubraceFeature>,
}

/// A playable race from the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub name: String,
    pub description: Option<String>,
    pub base_speed: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub features: Vec<RaceFeature>,
    #[serde(default)]
    pub subraces: Vec<Subrace>,
}
