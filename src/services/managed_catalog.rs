use std::collections::BTreeMap;

use crate::domain::Dependency;
use crate::ports::DependencyCatalog;

/// The managed dependency catalog: management key -> managed entry.
///
/// Built once from a sequence of entries and read-only afterward. Storage is
/// a mapping, so a duplicate management key overwrites the earlier entry
/// (last write wins).
#[derive(Debug, Clone, Default)]
pub struct ManagedCatalog {
    entries: BTreeMap<String, Dependency>,
}

impl ManagedCatalog {
    /// Build the catalog from managed entries, in declaration order.
    pub fn from_entries(entries: Vec<Dependency>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.insert(entry.management_key(), entry);
        }
        Self { entries: map }
    }

    /// Number of distinct management keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All management keys present in the catalog, in key order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl DependencyCatalog for ManagedCatalog {
    fn get(&self, key: &str) -> Option<&Dependency> {
        self.entries.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn entry(group: &str, artifact: &str, version: &str) -> Dependency {
        let mut dependency = Dependency::new(Coordinate::new(group, artifact).unwrap());
        dependency.version = Some(version.to_string());
        dependency
    }

    #[test]
    fn lookup_by_management_key() {
        let catalog = ManagedCatalog::from_entries(vec![entry("g", "a", "1.0")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("g:a").unwrap().effective_version(), Some("1.0"));
        assert!(catalog.get("g:b").is_none());
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let catalog =
            ManagedCatalog::from_entries(vec![entry("g", "a", "1.0"), entry("g", "a", "2.0")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("g:a").unwrap().effective_version(), Some("2.0"));
    }

    #[test]
    fn keys_lists_all_entries() {
        let catalog =
            ManagedCatalog::from_entries(vec![entry("g", "b", "1.0"), entry("g", "a", "1.0")]);
        assert_eq!(catalog.keys(), vec!["g:a", "g:b"]);
    }

    #[test]
    fn empty_catalog() {
        let catalog = ManagedCatalog::from_entries(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.keys().is_empty());
    }
}
