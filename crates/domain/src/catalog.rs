//! Static game catalogues the analyzer consumes.
//!
//! The skill and role lists are supplied to the analyzer as plain ordered
//! collections so callers can substitute their own. These are the stock
//! lists for the game.

/// The recognized skill names, in rulebook order.
pub const SKILLS: [&str; 18] = [
    "Acrobatics",
    "Animal Handling",
    "Arcana",
    "Athletics",
    "Deception",
    "History",
    "Insight",
    "Intimidation",
    "Investigation",
    "Medicine",
    "Nature",
    "Perception",
    "Performance",
    "Persuasion",
    "Religion",
    "Sleight of Hand",
    "Stealth",
    "Survival",
];

/// The recognized party role names.
pub const ROLES: [&str; 6] = ["Tank", "Healer", "Damage", "Support", "Control", "Utility"];

/// The stock skill catalogue as an owned list.
pub fn default_skills() -> Vec<String> {
    SKILLS.iter().map(|s| s.to_string()).collect()
}

/// The stock role catalogue as an owned list.
pub fn default_roles() -> Vec<String> {
    ROLES.iter().map(|s| s.to_string()).collect()
}
