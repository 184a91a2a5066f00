//! Collection exports
//!
//! The web app loads resource records in bulk from the hosted backend; the
//! same records travel as a JSON array when a collection is exported. This
//! module is the only fallible boundary in the crate: everything past loading
//! is total.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::filter::collect_tags;
use crate::types::{Resource, ResourceKind};

/// Error type for collection loading.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("invalid collection JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate resource id: {0}")]
    DuplicateId(String),
}

/// A set of resource records, as exported from the hosted backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub resources: Vec<Resource>,
}

impl Collection {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Parse a JSON export.
    ///
    /// Resource ids are the delete handle, so an export with duplicates is
    /// rejected as corrupt.
    pub fn from_json(json: &str) -> Result<Self, CollectionError> {
        let collection: Self = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for resource in &collection.resources {
            if !seen.insert(resource.id.as_str()) {
                return Err(CollectionError::DuplicateId(resource.id.clone()));
            }
            if resource.kind == ResourceKind::Link && resource.url.is_none() {
                log::warn!("link resource '{}' has no url", resource.id);
            }
        }

        log::debug!("loaded collection with {} resources", collection.resources.len());
        Ok(collection)
    }

    pub fn to_json(&self) -> Result<String, CollectionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CollectionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Distinct tags across the collection, in first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(&self.resources)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PreviewKind;

    const EXPORT: &str = r#"[
        {
            "id": "a1",
            "title": "Paper A",
            "tags": ["ml", "paper"],
            "type": "file",
            "url": "https://blob.example.com/a1.pdf"
        },
        {
            "id": "b2",
            "title": "Talk",
            "tags": ["ml"],
            "type": "link",
            "url": "https://youtu.be/abc123",
            "preview": { "type": "video", "url": "https://youtu.be/abc123" }
        }
    ]"#;

    #[test]
    fn test_from_json() {
        let collection = Collection::from_json(EXPORT).unwrap();
        assert_eq!(collection.len(), 2);

        let talk = &collection.resources[1];
        assert_eq!(talk.kind, ResourceKind::Link);
        assert_eq!(talk.url.as_deref(), Some("https://youtu.be/abc123"));
        assert_eq!(talk.preview.as_ref().unwrap().kind, PreviewKind::Video);

        assert_eq!(collection.all_tags(), ["ml", "paper"]);
    }

    #[test]
    fn test_from_json_empty() {
        let collection = Collection::from_json("[]").unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Collection::from_json("{"),
            Err(CollectionError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a1", "title": "One", "type": "link", "url": "https://example.com"},
            {"id": "a1", "title": "Two", "type": "link", "url": "https://example.org"}
        ]"#;
        match Collection::from_json(json) {
            Err(CollectionError::DuplicateId(id)) => assert_eq!(id, "a1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_roundtrip_is_a_bare_array() {
        let collection = Collection::from_json(EXPORT).unwrap();
        let json = collection.to_json().unwrap();
        assert!(json.starts_with('['));
        assert_eq!(Collection::from_json(&json).unwrap(), collection);
    }
}
