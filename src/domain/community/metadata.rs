//! CommunityMetadata and its lookup store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ClusterId, CommunityError};

/// Name and description of one community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityMetadata {
    pub name: String,
    pub description: String,
}

impl CommunityMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Immutable mapping from cluster id to its metadata.
///
/// Lookups never fall back to a default entry: a missing id is reported as
/// `UnknownCluster` so the caller can surface a user-facing error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommunityMetadataStore {
    entries: BTreeMap<ClusterId, CommunityMetadata>,
}

impl CommunityMetadataStore {
    pub fn new(entries: BTreeMap<ClusterId, CommunityMetadata>) -> Self {
        Self { entries }
    }

    /// Returns the metadata for `cluster_id`.
    pub fn describe(&self, cluster_id: &ClusterId) -> Result<&CommunityMetadata, CommunityError> {
        self.entries
            .get(cluster_id)
            .ok_or_else(|| CommunityError::UnknownCluster(cluster_id.clone()))
    }

    /// Fails with the first id in `ids` that has no entry.
    pub fn ensure_covers<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a ClusterId>,
    ) -> Result<(), CommunityError> {
        for id in ids {
            self.describe(id)?;
        }
        Ok(())
    }

    pub fn contains(&self, cluster_id: &ClusterId) -> bool {
        self.entries.contains_key(cluster_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by cluster id.
    pub fn iter(&self) -> impl Iterator<Item = (&ClusterId, &CommunityMetadata)> {
        self.entries.iter()
    }
}

impl FromIterator<(ClusterId, CommunityMetadata)> for CommunityMetadataStore {
    fn from_iter<I: IntoIterator<Item = (ClusterId, CommunityMetadata)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(label: &str) -> ClusterId {
        ClusterId::new(label).unwrap()
    }

    fn store() -> CommunityMetadataStore {
        vec![
            (id("A"), CommunityMetadata::new("Mountain hikers", "People who love peaks")),
            (id("B"), CommunityMetadata::new("Lake dwellers", "People who love water")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn describes_known_cluster() {
        let meta = store().describe(&id("B")).unwrap().clone();
        assert_eq!(meta.name, "Lake dwellers");
    }

    #[test]
    fn unknown_cluster_is_an_error_not_a_default() {
        let err = store().describe(&id("C")).unwrap_err();
        assert!(matches!(err, CommunityError::UnknownCluster(ref c) if c.as_str() == "C"));
    }

    #[test]
    fn ensure_covers_reports_first_missing_id() {
        let store = store();
        assert!(store.ensure_covers([&id("A"), &id("B")]).is_ok());

        let ids = [id("A"), id("C"), id("D")];
        let err = store.ensure_covers(ids.iter()).unwrap_err();
        assert!(matches!(err, CommunityError::UnknownCluster(ref c) if c.as_str() == "C"));
    }

    #[test]
    fn deserializes_from_keyed_object() {
        let json = r#"{
            "Cluster 0": {"name": "Readers", "description": "Quiet evenings"},
            "Cluster 1": {"name": "Runners", "description": "Early mornings"}
        }"#;
        let store: CommunityMetadataStore = serde_json::from_str(json).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.describe(&id("Cluster 1")).unwrap().name, "Runners");
    }

    #[test]
    fn blank_cluster_key_is_rejected() {
        let json = r#"{" ": {"name": "x", "description": "y"}}"#;
        assert!(serde_json::from_str::<CommunityMetadataStore>(json).is_err());
    }
}
