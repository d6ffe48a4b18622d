//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Error injection for resilience testing
//! - Call tracking for verification
//! - A factory that rejects chosen API keys
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new().with_response("Friday: lake walk");
//! let factory = MockAIProviderFactory::new(provider.clone()).rejecting("sk-bad");
//!
//! let response = factory.for_credential(key)?.complete(request).await?;
//! ```

use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::{
    AIError, AIProvider, AIProviderFactory, ApiKey, CompletionRequest, CompletionResponse,
    FinishReason, ProviderInfo, TokenUsage,
};

/// Mock AI provider for testing.
///
/// Clones share the response queue and call history.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    /// When set, every call fails authentication.
    reject_credentials: bool,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success { content: String, usage: TokenUsage },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            calls: Arc::new(Mutex::new(Vec::new())),
            reject_credentials: false,
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    fn rejecting_clone(&self) -> Self {
        Self {
            reject_credentials: true,
            ..self.clone()
        }
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                usage: TokenUsage::new(5, 10),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        if self.reject_credentials {
            return Err(AIError::AuthenticationFailed);
        }

        match self.next_response() {
            MockResponse::Success { content, usage } => Ok(CompletionResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

/// Hands out a shared [`MockAIProvider`] for every credential.
///
/// Keys registered with [`MockAIProviderFactory::rejecting`] get a provider
/// whose calls fail with `AuthenticationFailed`.
#[derive(Debug, Clone, Default)]
pub struct MockAIProviderFactory {
    provider: MockAIProvider,
    rejected: HashSet<String>,
    credentials_seen: Arc<Mutex<Vec<String>>>,
}

impl MockAIProviderFactory {
    pub fn new(provider: MockAIProvider) -> Self {
        Self {
            provider,
            rejected: HashSet::new(),
            credentials_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Marks `api_key` as invalid.
    pub fn rejecting(mut self, api_key: impl Into<String>) -> Self {
        self.rejected.insert(api_key.into());
        self
    }

    pub fn provider(&self) -> &MockAIProvider {
        &self.provider
    }

    /// Number of providers built so far.
    pub fn bind_count(&self) -> usize {
        lock(&self.credentials_seen).len()
    }
}

impl AIProviderFactory for MockAIProviderFactory {
    fn for_credential(&self, api_key: ApiKey) -> Result<Arc<dyn AIProvider>, AIError> {
        let key = api_key.expose_secret().clone();
        let provider = if self.rejected.contains(&key) {
            self.provider.rejecting_clone()
        } else {
            self.provider.clone()
        };
        lock(&self.credentials_seen).push(key);
        Ok(Arc::new(provider))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
