//! Composition alerts derived from distributions and coverage.

use serde::{Deserialize, Serialize};

use super::coverage::SkillCoverage;
use super::distribution::DistributionEntry;
use super::{UNASSIGNED_CLASS, UNDEFINED_ROLE};

/// Actionable warnings about roster composition.
///
/// The four lists are independent; nothing suppresses anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionAlerts {
    /// Catalogue skills nobody covers
    pub missing_skills: Vec<String>,
    /// Classes held by more than one member (placeholder excluded)
    pub duplicate_classes: Vec<String>,
    /// Roles held by more than one member (placeholder excluded)
    pub duplicate_roles: Vec<String>,
    /// Catalogue roles nobody fills
    pub missing_roles: Vec<String>,
}

fn duplicates(distribution: &[DistributionEntry], placeholder: &str) -> Vec<String> {
    distribution
        .iter()
        .filter(|entry| entry.count > 1 && entry.name != placeholder)
        .map(|entry| entry.name.clone())
        .collect()
}

/// Derive the alert bundle from the distributions, the skill coverage and
/// the role catalogue.
pub(crate) fn derive_alerts(
    class_distribution: &[DistributionEntry],
    role_distribution: &[DistributionEntry],
    coverage: &SkillCoverage,
    role_catalogue: &[String],
) -> CompositionAlerts {
    let missing_roles = role_catalogue
        .iter()
        .filter(|role| !role_distribution.iter().any(|entry| &entry.name == *role))
        .cloned()
        .collect();

    CompositionAlerts {
        missing_skills: coverage.missing.clone(),
        duplicate_classes: duplicates(class_distribution, UNASSIGNED_CLASS),
        duplicate_roles: duplicates(role_distribution, UNDEFINED_ROLE),
        missing_roles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, count: usize) -> DistributionEntry {
        DistributionEntry {
            name: name.to_string(),
            count,
        }
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn no_coverage() -> SkillCoverage {
        SkillCoverage {
            covered: Vec::new(),
            missing: Vec::new(),
        }
    }

    #[test]
    fn duplicates_require_count_above_one() {
        let classes = vec![entry("Fighter", 3), entry("Wizard", 2), entry("Rogue", 1)];
        let alerts = derive_alerts(&classes, &[], &no_coverage(), &[]);
        assert_eq!(alerts.duplicate_classes, vec!["Fighter", "Wizard"]);
    }

    #[test]
    fn placeholder_labels_are_never_duplicates() {
        let classes = vec![entry(UNASSIGNED_CLASS, 4)];
        let role_dist = vec![entry(UNDEFINED_ROLE, 4)];
        let alerts = derive_alerts(&classes, &role_dist, &no_coverage(), &[]);
        assert!(alerts.duplicate_classes.is_empty());
        assert!(alerts.duplicate_roles.is_empty());
    }

    #[test]
    fn missing_roles_are_catalogue_roles_with_zero_count() {
        let role_dist = vec![entry("Tank", 1), entry("Damage", 2)];
        let alerts = derive_alerts(
            &[],
            &role_dist,
            &no_coverage(),
            &roles(&["Tank", "Healer", "Damage"]),
        );
        assert_eq!(alerts.missing_roles, vec!["Healer"]);
        assert_eq!(alerts.duplicate_roles, vec!["Damage"]);
    }
}
