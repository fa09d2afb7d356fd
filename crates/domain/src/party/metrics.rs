//! Party metrics aggregation.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::alerts::{derive_alerts, CompositionAlerts};
use super::coverage::skill_coverage;
use super::damage::{spell_damage_types, weapon_damage_types};
use super::distribution::{build_distribution, DistributionEntry};
use super::{UNASSIGNED_CLASS, UNDEFINED_ROLE};
use crate::common::none_if_blank;
use crate::entities::{PartyMember, Spell, Weapon, WEAPON_SLOTS};

/// The reference collections the analyzer reads. All borrowed; the
/// analyzer never takes ownership of catalogue data.
#[derive(Debug, Clone, Copy)]
pub struct Catalogues<'a> {
    pub spells: &'a [Spell],
    pub weapons: &'a [Weapon],
    pub skills: &'a [String],
    pub roles: &'a [String],
}

/// Damage types the party can inflict, split by source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageTypeBreakdown {
    /// From known spells
    pub spells: Vec<String>,
    /// From equipped weapons
    pub equipment: Vec<String>,
    /// Sorted union of the two (duplicates collapse)
    pub combined: Vec<String>,
}

/// The derived party summary. Recomputed on every call; nothing here is
/// ever persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMetrics {
    pub total_members: usize,
    /// Mean level, rounded to 2 decimals (half away from zero)
    pub average_level: f64,
    pub skills_covered: Vec<String>,
    pub missing_skills: Vec<String>,
    pub class_distribution: Vec<DistributionEntry>,
    pub role_distribution: Vec<DistributionEntry>,
    pub damage_types: DamageTypeBreakdown,
    pub alerts: CompositionAlerts,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn effective_label<'a>(label: &'a Option<String>, placeholder: &'a str) -> &'a str {
    label
        .as_deref()
        .and_then(none_if_blank)
        .unwrap_or(placeholder)
}

/// Analyze the roster against the reference catalogues.
///
/// Pure and deterministic: value-equal inputs produce deep-equal output.
/// Unknown spell and weapon names are soft references and contribute
/// nothing. An empty roster short-circuits to the degenerate summary
/// (full catalogues missing, nothing covered, no averages to divide).
pub fn analyze_party(roster: &[PartyMember], catalogues: &Catalogues<'_>) -> PartyMetrics {
    if roster.is_empty() {
        let missing_skills = catalogues.skills.to_vec();
        let missing_roles = catalogues.roles.to_vec();
        return PartyMetrics {
            total_members: 0,
            average_level: 0.0,
            skills_covered: Vec::new(),
            missing_skills: missing_skills.clone(),
            class_distribution: Vec::new(),
            role_distribution: Vec::new(),
            damage_types: DamageTypeBreakdown::default(),
            alerts: CompositionAlerts {
                missing_skills,
                duplicate_classes: Vec::new(),
                duplicate_roles: Vec::new(),
                missing_roles,
            },
        };
    }

    let spells_by_name: HashMap<&str, &Spell> = catalogues
        .spells
        .iter()
        .map(|spell| (spell.name.as_str(), spell))
        .collect();
    let weapons_by_name: HashMap<&str, &Weapon> = catalogues
        .weapons
        .iter()
        .map(|weapon| (weapon.name.as_str(), weapon))
        .collect();

    let mut level_sum: u64 = 0;
    let mut spell_damage: BTreeSet<String> = BTreeSet::new();
    let mut equipment_damage: BTreeSet<String> = BTreeSet::new();

    for member in roster {
        level_sum += u64::from(member.level);

        for spell_name in &member.spells {
            if let Some(spell) = spells_by_name.get(spell_name.as_str()) {
                spell_damage.extend(spell_damage_types(spell));
            }
        }
        for slot in WEAPON_SLOTS {
            if let Some(item_name) = member.equipment.get(&slot) {
                if let Some(weapon) = weapons_by_name.get(item_name.as_str()) {
                    equipment_damage.extend(weapon_damage_types(weapon));
                }
            }
        }
    }

    let class_distribution = build_distribution(
        roster
            .iter()
            .map(|m| effective_label(&m.class_name, UNASSIGNED_CLASS)),
    );
    let role_distribution =
        build_distribution(roster.iter().map(|m| effective_label(&m.role, UNDEFINED_ROLE)));

    let coverage = skill_coverage(roster, catalogues.skills);
    let alerts = derive_alerts(
        &class_distribution,
        &role_distribution,
        &coverage,
        catalogues.roles,
    );

    let combined: BTreeSet<String> = spell_damage.union(&equipment_damage).cloned().collect();

    PartyMetrics {
        total_members: roster.len(),
        average_level: round2(level_sum as f64 / roster.len() as f64),
        skills_covered: coverage.covered.clone(),
        missing_skills: coverage.missing.clone(),
        class_distribution,
        role_distribution,
        damage_types: DamageTypeBreakdown {
            spells: spell_damage.into_iter().collect(),
            equipment: equipment_damage.into_iter().collect(),
            combined: combined.into_iter().collect(),
        },
        alerts,
    }
}
