//! AI Provider Adapters.
//!
//! Implementations of the AIProvider and NarrativeService ports.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` / `MockAIProviderFactory` - Configurable mocks for testing
//! - `OpenAIProvider` / `OpenAIProviderFactory` - OpenAI chat completions
//! - `LlmNarrativeService` - Credential check and meetup-plan generation

mod mock_provider;
mod narrative_service;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockAIProviderFactory, MockError, MockResponse};
pub use narrative_service::LlmNarrativeService;
pub use openai_provider::{OpenAIConfig, OpenAIProvider, OpenAIProviderFactory};
