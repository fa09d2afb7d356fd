//! Shareable export of a filtered metrics view.
//!
//! Consumers can serialize a filtered snapshot of the analysis for
//! sharing; the document records which filters produced the metrics. The
//! analyzer itself stays serialization-free — this is plain data.

use serde::{Deserialize, Serialize};

use super::metrics::{analyze_party, Catalogues, PartyMetrics};
use super::{UNASSIGNED_CLASS, UNDEFINED_ROLE};
use crate::common::none_if_blank;
use crate::entities::PartyMember;

/// Roster filters applied before analysis. Empty lists match everything.
///
/// Labels match the effective values, so the placeholder labels select
/// unassigned members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFilters {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl ExportFilters {
    fn matches(&self, member: &PartyMember) -> bool {
        let class = member
            .class_name
            .as_deref()
            .and_then(none_if_blank)
            .unwrap_or(UNASSIGNED_CLASS);
        let role = member
            .role
            .as_deref()
            .and_then(none_if_blank)
            .unwrap_or(UNDEFINED_ROLE);
        let class_ok = self.classes.is_empty() || self.classes.iter().any(|c| c == class);
        let role_ok = self.roles.is_empty() || self.roles.iter().any(|r| r == role);
        class_ok && role_ok
    }
}

/// The export document: the filters that were applied and the metrics of
/// the surviving roster slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsExport {
    pub filters: ExportFilters,
    pub metrics: PartyMetrics,
}

impl MetricsExport {
    /// Filter the roster and analyze what remains.
    pub fn build(
        roster: &[PartyMember],
        catalogues: &Catalogues<'_>,
        filters: ExportFilters,
    ) -> Self {
        let filtered: Vec<PartyMember> = roster
            .iter()
            .filter(|member| filters.matches(member))
            .cloned()
            .collect();
        let metrics = analyze_party(&filtered, catalogues);
        Self { filters, metrics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_roles, default_skills};

    fn member(name: &str, class_name: Option<&str>, role: Option<&str>) -> PartyMember {
        let mut m = PartyMember::new(name);
        m.class_name = class_name.map(|c| c.to_string());
        m.role = role.map(|r| r.to_string());
        m
    }

    fn catalogues<'a>(skills: &'a [String], roles: &'a [String]) -> Catalogues<'a> {
        Catalogues {
            spells: &[],
            weapons: &[],
            skills,
            roles,
        }
    }

    #[test]
    fn empty_filters_keep_the_whole_roster() {
        let skills = default_skills();
        let roles = default_roles();
        let roster = vec![
            member("A", Some("Wizard"), Some("Damage")),
            member("B", Some("Cleric"), Some("Healer")),
        ];
        let export = MetricsExport::build(
            &roster,
            &catalogues(&skills, &roles),
            ExportFilters::default(),
        );
        assert_eq!(export.metrics.total_members, 2);
    }

    #[test]
    fn class_filter_selects_a_slice() {
        let skills = default_skills();
        let roles = default_roles();
        let roster = vec![
            member("A", Some("Wizard"), None),
            member("B", Some("Cleric"), None),
        ];
        let filters = ExportFilters {
            classes: vec!["Wizard".to_string()],
            roles: Vec::new(),
        };
        let export = MetricsExport::build(&roster, &catalogues(&skills, &roles), filters);
        assert_eq!(export.metrics.total_members, 1);
        assert_eq!(export.filters.classes, vec!["Wizard"]);
    }

    #[test]
    fn placeholder_label_selects_unassigned_members() {
        let skills = default_skills();
        let roles = default_roles();
        let roster = vec![member("A", None, None), member("B", Some("Paladin"), None)];
        let filters = ExportFilters {
            classes: vec![UNASSIGNED_CLASS.to_string()],
            roles: Vec::new(),
        };
        let export = MetricsExport::build(&roster, &catalogues(&skills, &roles), filters);
        assert_eq!(export.metrics.total_members, 1);
    }

    #[test]
    fn export_serializes_filters_and_metrics_keys() {
        let skills = default_skills();
        let roles = default_roles();
        let export = MetricsExport::build(
            &[],
            &catalogues(&skills, &roles),
            ExportFilters::default(),
        );
        let json = serde_json::to_value(&export).expect("serializes");
        assert!(json.get("filters").is_some());
        assert!(json.get("metrics").is_some());
    }
}
