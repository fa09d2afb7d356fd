//! Icon asset lookup.
//!
//! A read-only index over a static JSON manifest mapping display names to
//! icon asset paths. Lookups are keyed by normalized name so "Fire Bolt",
//! "fire bolt" and "Fire-Bolt" resolve to the same icon. Built once at
//! startup; nothing here mutates after construction.

use std::collections::HashMap;
use std::path::Path;

/// Index of icon paths keyed by normalized display name.
pub struct IconIndex {
    icons: HashMap<String, String>,
}

impl IconIndex {
    /// Build the index from a JSON manifest (`{"Fire Bolt": "icons/fire_bolt.png", ...}`).
    ///
    /// A missing or unreadable manifest yields an empty index with a
    /// warning; icon lookup is cosmetic and must not block startup.
    pub fn from_manifest(path: &Path) -> Self {
        let icons = match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<HashMap<String, String>>(&text) {
                Ok(entries) => entries
                    .into_iter()
                    .map(|(name, asset)| (normalize_name(&name), asset))
                    .collect(),
                Err(e) => {
                    tracing::warn!("Icon manifest {} is not valid JSON: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::warn!("Icon manifest {} not readable: {e}", path.display());
                HashMap::new()
            }
        };
        tracing::debug!(icons = icons.len(), "Icon index built");
        Self { icons }
    }

    /// An index with no entries (no manifest configured).
    pub fn empty() -> Self {
        Self {
            icons: HashMap::new(),
        }
    }

    /// Look up the asset path for a display name.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.icons.get(&normalize_name(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Lowercase alphanumerics only: the key under which icons are filed.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manifest(entries: &str) -> (tempfile::TempDir, IconIndex) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icons.json");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(entries.as_bytes()).expect("write");
        let index = IconIndex::from_manifest(&path);
        (dir, index)
    }

    #[test]
    fn lookup_ignores_case_and_punctuation() {
        let (_dir, index) = manifest(r#"{"Fire Bolt": "icons/fire_bolt.png"}"#);
        assert_eq!(index.lookup("fire bolt"), Some("icons/fire_bolt.png"));
        assert_eq!(index.lookup("Fire-Bolt"), Some("icons/fire_bolt.png"));
        assert_eq!(index.lookup("FIREBOLT"), Some("icons/fire_bolt.png"));
        assert_eq!(index.lookup("Ray of Frost"), None);
    }

    #[test]
    fn unreadable_manifest_yields_empty_index() {
        let index = IconIndex::from_manifest(Path::new("/nonexistent/icons.json"));
        assert!(index.is_empty());
    }

    #[test]
    fn invalid_json_yields_empty_index() {
        let (_dir, index) = manifest("not json");
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
