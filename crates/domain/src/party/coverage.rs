//! Skill coverage against the skill catalogue.

use std::collections::BTreeSet;

use crate::common::sort_nocase;
use crate::entities::PartyMember;

/// Which catalogue skills the roster covers, and which it lacks.
///
/// Covered and missing partition the catalogue: their union is exactly
/// the catalogue and their intersection is empty. Member skills outside
/// the catalogue are tracked while accumulating but surface in neither
/// list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCoverage {
    /// Catalogue skills at least one member has. Sorted, de-duplicated.
    pub covered: Vec<String>,
    /// Catalogue skills no member has. Sorted, de-duplicated.
    pub missing: Vec<String>,
}

/// Compute skill coverage for the roster.
pub(crate) fn skill_coverage(roster: &[PartyMember], skill_catalogue: &[String]) -> SkillCoverage {
    let mut possessed: BTreeSet<String> = BTreeSet::new();
    for member in roster {
        for skill in &member.skills {
            let trimmed = skill.trim();
            if !trimmed.is_empty() {
                possessed.insert(trimmed.to_string());
            }
        }
    }

    let mut covered: Vec<String> = skill_catalogue
        .iter()
        .filter(|skill| possessed.contains(*skill))
        .cloned()
        .collect();
    sort_nocase(&mut covered);
    covered.dedup();

    let mut missing: Vec<String> = skill_catalogue
        .iter()
        .filter(|skill| !possessed.contains(*skill))
        .cloned()
        .collect();
    sort_nocase(&mut missing);
    missing.dedup();

    SkillCoverage { covered, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(skills: &[&str]) -> PartyMember {
        PartyMember::new("Member").with_skills(skills.iter().copied())
    }

    fn catalogue(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn covered_union_missing_equals_catalogue() {
        let skills = catalogue(&["Arcana", "Athletics", "Stealth"]);
        let roster = vec![member(&["Stealth"]), member(&["Arcana"])];
        let coverage = skill_coverage(&roster, &skills);
        assert_eq!(coverage.covered, vec!["Arcana", "Stealth"]);
        assert_eq!(coverage.missing, vec!["Athletics"]);
    }

    #[test]
    fn off_catalogue_skills_surface_in_neither_list() {
        let skills = catalogue(&["Arcana"]);
        let roster = vec![member(&["Lockpicking"])];
        let coverage = skill_coverage(&roster, &skills);
        assert!(coverage.covered.is_empty());
        assert_eq!(coverage.missing, vec!["Arcana"]);
    }

    #[test]
    fn duplicate_member_skills_collapse() {
        let skills = catalogue(&["Stealth"]);
        let roster = vec![member(&["Stealth", "Stealth"]), member(&["Stealth"])];
        let coverage = skill_coverage(&roster, &skills);
        assert_eq!(coverage.covered, vec!["Stealth"]);
        assert!(coverage.missing.is_empty());
    }

    #[test]
    fn empty_roster_misses_the_whole_catalogue() {
        let skills = catalogue(&["Arcana", "Stealth"]);
        let coverage = skill_coverage(&[], &skills);
        assert!(coverage.covered.is_empty());
        assert_eq!(coverage.missing, skills);
    }
}
