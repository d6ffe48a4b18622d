//! Metadata Adapters - community names and descriptions from a file.

mod file_metadata;

pub use file_metadata::FileMetadataSource;
