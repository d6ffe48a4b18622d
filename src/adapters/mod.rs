//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers and the narrative service (OpenAI, mocks)
//! - `dataset` - respondent rows from delimited files
//! - `http` - axum REST API
//! - `metadata` - community names and descriptions from JSON/YAML files
//! - `model` - pretrained clustering artifacts

pub mod ai;
pub mod dataset;
pub mod http;
pub mod metadata;
pub mod model;

pub use ai::{LlmNarrativeService, MockAIProviderFactory, OpenAIConfig, OpenAIProviderFactory};
pub use dataset::CsvSurveyDataset;
pub use http::api_router;
pub use metadata::FileMetadataSource;
pub use model::FileModelRepository;
