//! Gate decision values.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The outcome of a document access check.
///
/// Denial is an ordinary result, not an error; callers surface it as an
/// access-denied response without leaking whether the document exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessDecision {
    /// The user may read the document.
    Grant,
    /// The user may not read the document.
    Deny,
}

impl AccessDecision {
    /// Whether access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Grant)
    }
}

/// The set of document paths a user can reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSet {
    /// Every document is accessible.
    All,
    /// Only the enumerated paths are accessible.
    Paths(HashSet<String>),
}

impl DocumentSet {
    /// An empty enumerated set.
    pub fn empty() -> Self {
        Self::Paths(HashSet::new())
    }

    /// Whether this is the wildcard set.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether the given path is accessible.
    pub fn contains(&self, path: &str) -> bool {
        match self {
            Self::All => true,
            Self::Paths(paths) => paths.contains(path),
        }
    }

    /// Number of enumerated paths; `None` for the wildcard set.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Paths(paths) => Some(paths.len()),
        }
    }

    /// Whether no document is accessible.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

/// Whether the path falls under one of the configured public prefixes.
pub fn is_public_path(path: &str, public_prefixes: &[String]) -> bool {
    public_prefixes
        .iter()
        .any(|prefix| path.starts_with(prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_prefix_match() {
        let prefixes = vec!["cache".to_string(), "uploads/image".to_string()];
        assert!(is_public_path("cache/thumb/42.png", &prefixes));
        assert!(is_public_path("uploads/image/logo.png", &prefixes));
        assert!(!is_public_path("uploads/contract/c1.pdf", &prefixes));
    }

    #[test]
    fn test_wildcard_contains_everything() {
        assert!(DocumentSet::All.contains("uploads/anything/at/all.pdf"));
        assert!(DocumentSet::All.is_wildcard());
        assert_eq!(DocumentSet::All.len(), None);
    }

    #[test]
    fn test_enumerated_set_membership() {
        let docs = DocumentSet::Paths(
            ["uploads/contract/c1.pdf".to_string()].into_iter().collect(),
        );
        assert!(docs.contains("uploads/contract/c1.pdf"));
        assert!(!docs.contains("uploads/contract/c2.pdf"));
        assert!(!docs.is_wildcard());
    }

    #[test]
    fn test_empty_set_denies_everything() {
        let docs = DocumentSet::empty();
        assert!(docs.is_empty());
        assert!(!docs.contains("uploads/contract/c1.pdf"));
    }
}
