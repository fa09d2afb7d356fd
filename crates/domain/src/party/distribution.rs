//! Frequency tables over roster labels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::nocase_cmp;

/// One row of a distribution: a label and how many members carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub name: String,
    pub count: usize,
}

/// Count labels into a sorted frequency table.
///
/// Ordering is count descending, then name ascending under case-insensitive
/// collation, so the table is deterministic regardless of roster order.
pub(crate) fn build_distribution<'a, I>(labels: I) -> Vec<DistributionEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(name, count)| DistributionEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| nocase_cmp(&a.name, &b.name))
    });
    entries
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

    #[test]
    fn sorts_by_count_then_name() {
        let table = build_distribution(
            ["Wizard", "Wizard", "Fighter", "Fighter", "Fighter", "Rogue"].into_iter(),
        );
        assert_eq!(
            table,
            vec![entry("Fighter", 3), entry("Wizard", 2), entry("Rogue", 1)]
        );
    }

    #[test]
    fn ties_break_alphabetically_ignoring_case() {
        let table = build_distribution(["barbarian", "Wizard", "barbarian", "Wizard"].into_iter());
        assert_eq!(
            table,
            vec![entry("barbarian", 2), entry("Wizard", 2)]
        );
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(build_distribution(std::iter::empty::<&str>()).is_empty());
    }
}
