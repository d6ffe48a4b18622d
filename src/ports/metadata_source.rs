//! Metadata Source Port - community names and descriptions.

use crate::domain::community::CommunityMetadataStore;
use crate::domain::foundation::CommunityError;

/// Loads the community metadata store.
pub trait MetadataSource: Send + Sync {
    fn load(&self) -> Result<CommunityMetadataStore, MetadataError>;
}

/// Errors loading community metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata file not found: {0}")]
    NotFound(String),

    #[error("metadata file is malformed: {0}")]
    Malformed(String),

    #[error("metadata I/O error: {0}")]
    Io(String),
}

impl From<MetadataError> for CommunityError {
    fn from(err: MetadataError) -> Self {
        CommunityError::DataUnavailable(err.to_string())
    }
}
