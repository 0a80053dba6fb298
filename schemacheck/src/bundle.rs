//! Bundled resource store.
//!
//! Named assets compiled into the binary with `include_bytes!` and looked up
//! by logical identifier rather than filesystem path. This is how the schema
//! document ships with the tool without requiring any install-time files.
//!
//! Identifier convention: the schema uses a leading slash (`/schema.json`)
//! and is only ever loaded through the resource-only retrieval path. Bundle
//! entries meant to be reachable through general input classification must
//! NOT start with a slash — a slash-prefixed identifier classifies as an
//! absolute file path first.

/// Read-only store of named byte assets.
pub trait ResourceBundle {
    /// Content of the resource, if present.
    fn get(&self, resource_id: &str) -> Option<&[u8]>;

    /// Whether a resource with this identifier exists.
    ///
    /// Existence only; content is neither read nor parsed.
    fn contains(&self, resource_id: &str) -> bool {
        self.get(resource_id).is_some()
    }
}

/// A [`ResourceBundle`] backed by a static table of entries.
#[derive(Debug, Clone, Copy)]
pub struct StaticBundle {
    entries: &'static [(&'static str, &'static [u8])],
}

impl StaticBundle {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }
}

impl ResourceBundle for StaticBundle {
    fn get(&self, resource_id: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(id, _)| *id == resource_id)
            .map(|(_, bytes)| *bytes)
    }
}

const EMBEDDED: StaticBundle = StaticBundle::new(&[
    ("/schema.json", include_bytes!("../resources/schema.json")),
    (
        "policies/valid_policy.json",
        include_bytes!("../resources/policies/valid_policy.json"),
    ),
    (
        "policies/invalid_policy.json",
        include_bytes!("../resources/policies/invalid_policy.json"),
    ),
]);

/// The resources shipped with this crate: the schema document plus the
/// sample policy documents.
#[must_use]
pub const fn embedded() -> &'static StaticBundle {
    &EMBEDDED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_contains_schema() {
        assert!(embedded().contains("/schema.json"));
        assert!(embedded().contains("policies/valid_policy.json"));
        assert!(embedded().contains("policies/invalid_policy.json"));
    }

    #[test]
    fn test_missing_resource_is_absent() {
        assert!(!embedded().contains("/no-such-resource.json"));
        assert!(embedded().get("/no-such-resource.json").is_none());
    }

    #[test]
    fn test_get_returns_content() {
        let bytes = embedded().get("/schema.json").unwrap();
        assert!(!bytes.is_empty());
    }
}
