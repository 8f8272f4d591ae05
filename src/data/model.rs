use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Catalog – the ordered set of picture identifiers
// ---------------------------------------------------------------------------

/// Ordered, duplicate-free list of picture identifiers (file names).
///
/// Identifiers double as display label and row key, so uniqueness is
/// enforced on construction rather than assumed from the file system.
/// A `Catalog` is never mutated once built; a rescan produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    identifiers: Vec<String>,
}

impl Catalog {
    /// Build a catalog from arbitrary names: sorted ascending by code point,
    /// duplicates removed.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            identifiers: unique.into_iter().collect(),
        }
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.identifiers.get(index).map(String::as_str)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.position(identifier).is_some()
    }

    /// Row index of `identifier`, if present.
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.identifiers
            .binary_search_by(|probe| probe.as_str().cmp(identifier))
            .ok()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.identifiers
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} picture(s)", self.identifiers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted_by_code_point() {
        let catalog = Catalog::from_names(["nssl0003.jpg", "nssl0001.jpg", "Nssl0002.jpg"]);
        assert_eq!(
            catalog.as_slice(),
            ["Nssl0002.jpg", "nssl0001.jpg", "nssl0003.jpg"]
        );
    }

    #[test]
    fn duplicate_names_collapse_to_one_row() {
        let catalog = Catalog::from_names(["b.jpg", "a.jpg", "b.jpg"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.as_slice(), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn lookup_by_identifier_and_index() {
        let catalog = Catalog::from_names(["nssl0001.jpg", "nssl0002.jpg"]);
        assert_eq!(catalog.position("nssl0002.jpg"), Some(1));
        assert_eq!(catalog.get(0), Some("nssl0001.jpg"));
        assert!(!catalog.contains("nssl0009.jpg"));
        assert_eq!(catalog.get(5), None);
    }

    #[test]
    fn default_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
        assert_eq!(catalog.to_string(), "0 picture(s)");
    }
}
