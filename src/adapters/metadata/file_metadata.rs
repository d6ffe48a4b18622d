//! File-backed MetadataSource.
//!
//! The file holds one object keyed by cluster id:
//!
//! ```text
//! { "Cluster 0": { "name": "...", "description": "..." } }
//! ```
//!
//! `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::community::CommunityMetadataStore;
use crate::ports::{MetadataError, MetadataSource};

#[derive(Debug, Clone)]
pub struct FileMetadataSource {
    path: PathBuf,
}

impl FileMetadataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        )
    }
}

impl MetadataSource for FileMetadataSource {
    fn load(&self) -> Result<CommunityMetadataStore, MetadataError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MetadataError::NotFound(self.path.display().to_string()),
            _ => MetadataError::Io(format!("{}: {}", self.path.display(), e)),
        })?;

        let store: CommunityMetadataStore = if self.is_yaml() {
            serde_yaml::from_str(&raw).map_err(|e| MetadataError::Malformed(e.to_string()))?
        } else {
            serde_json::from_str(&raw).map_err(|e| MetadataError::Malformed(e.to_string()))?
        };

        tracing::info!(communities = store.len(), path = %self.path.display(), "Community metadata loaded");
        Ok(store)
    }
}
