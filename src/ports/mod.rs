//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Model and Data Ports
//!
//! - `ModelRepository` / `ClusterAssigner` - Pretrained clustering model
//! - `SurveyDataset` - Historical respondent rows
//! - `MetadataSource` - Community names and descriptions
//!
//! ## AI Ports
//!
//! - `AIProvider` / `AIProviderFactory` - Hosted chat-completion service
//! - `NarrativeService` - Credential checks and meetup-plan generation

mod ai_provider;
mod cluster_assigner;
mod metadata_source;
mod narrative_service;
mod survey_dataset;

pub use ai_provider::{
    AIError, AIProvider, AIProviderFactory, ApiKey, CompletionRequest, CompletionResponse,
    FinishReason, Message, MessageRole, ProviderInfo, TokenUsage,
};
pub use cluster_assigner::{AssignmentError, ClusterAssigner, ModelRepository};
pub use metadata_source::{MetadataError, MetadataSource};
pub use narrative_service::NarrativeService;
pub use survey_dataset::{DatasetError, SurveyDataset};
