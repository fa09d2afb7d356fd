//! String conversion and ordering utilities.

use std::cmp::Ordering;

/// Converts a blank (empty or whitespace-only) string to `None`, otherwise
/// returns the trimmed value.
///
/// This is useful for labels that may be stored as empty strings in
/// databases or left blank by the roster editor.
///
/// # Examples
///
/// ```
/// use bg3companion_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("Wizard"), Some("Wizard"));
/// assert_eq!(none_if_blank(""), None);
/// assert_eq!(none_if_blank("   "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Case-insensitive ordering with a case-sensitive tiebreak.
///
/// Mirrors the `COLLATE NOCASE` ordering the reference databases use, while
/// staying deterministic for strings that differ only in case.
pub fn nocase_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()));
    folded.then_with(|| a.cmp(b))
}

/// Sorts a list of strings under [`nocase_cmp`].
pub fn sort_nocase(values: &mut [String]) {
    values.sort_by(|a, b| nocase_cmp(a, b));
}

/// De-duplicates strings case-insensitively, keeping the first spelling and
/// dropping blank entries. Order of first occurrence is preserved.
pub fn dedupe_case_insensitive<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let Some(text) = none_if_blank(value.as_ref()) else {
            continue;
        };
        let key = text.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(text.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(none_if_blank(""), None);
        assert_eq!(none_if_blank(" \t"), None);
        assert_eq!(none_if_blank(" Fighter "), Some("Fighter"));
    }

    #[test]
    fn nocase_cmp_ignores_case_first() {
        assert_eq!(nocase_cmp("acrobatics", "Arcana"), Ordering::Less);
        assert_eq!(nocase_cmp("Stealth", "stealth"), Ordering::Less);
        assert_eq!(nocase_cmp("Insight", "Insight"), Ordering::Equal);
    }

    #[test]
    fn dedupe_keeps_first_spelling() {
        let out = dedupe_case_insensitive(["Stealth", "stealth", "", "  ", "Arcana"]);
        assert_eq!(out, vec!["Stealth".to_string(), "Arcana".to_string()]);
    }
}
