//! Community module - human-readable names and descriptions per cluster.

mod metadata;

pub use metadata::{CommunityMetadata, CommunityMetadataStore};
