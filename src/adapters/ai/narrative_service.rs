//! LLM-backed NarrativeService.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::CommunityError;
use crate::domain::narrative::{NarrativeRequest, NarrativeRequestBuilder};
use crate::ports::{AIError, AIProviderFactory, ApiKey, CompletionRequest, NarrativeService};

/// Narrative service that calls a chat-completion provider per request.
#[derive(Clone)]
pub struct LlmNarrativeService {
    providers: Arc<dyn AIProviderFactory>,
}

impl LlmNarrativeService {
    pub fn new(providers: Arc<dyn AIProviderFactory>) -> Self {
        Self { providers }
    }

    async fn complete(&self, api_key: &ApiKey, request: &NarrativeRequest) -> Result<String, AIError> {
        let provider = self.providers.for_credential(api_key.clone())?;
        let response = provider.complete(CompletionRequest::from(request)).await?;
        Ok(response.content)
    }
}

#[async_trait]
impl NarrativeService for LlmNarrativeService {
    async fn verify_credential(&self, api_key: &ApiKey) -> Result<(), CommunityError> {
        self.complete(api_key, &NarrativeRequestBuilder::credential_check())
            .await
            .map(|_| ())
            .map_err(|err| credential_failure(err, "verification"))
    }

    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &NarrativeRequest,
    ) -> Result<String, CommunityError> {
        let content = self
            .complete(api_key, request)
            .await
            .map_err(|err| credential_failure(err, "generation"))?;
        tracing::debug!(chars = content.len(), "Narrative generated");
        Ok(content)
    }
}

fn credential_failure(err: AIError, stage: &'static str) -> CommunityError {
    if matches!(err, AIError::AuthenticationFailed) {
        tracing::warn!(stage, "API key rejected");
    }
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockAIProviderFactory, MockError};
    use crate::domain::foundation::ErrorCode;
    use secrecy::Secret;

    fn key(value: &str) -> ApiKey {
        Secret::new(value.to_string())
    }

    fn service(factory: MockAIProviderFactory) -> LlmNarrativeService {
        LlmNarrativeService::new(Arc::new(factory))
    }

    #[tokio::test]
    async fn verification_sends_the_fixed_check() {
        let factory = MockAIProviderFactory::new(MockAIProvider::new());
        let provider = factory.provider().clone();

        service(factory).verify_credential(&key("sk-ok")).await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].messages[0].content,
            NarrativeRequestBuilder::credential_check().prompt
        );
    }

    #[tokio::test]
    async fn rejected_key_is_credential_invalid() {
        let factory = MockAIProviderFactory::new(MockAIProvider::new()).rejecting("sk-bad");

        let err = service(factory)
            .verify_credential(&key("sk-bad"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CredentialInvalid);
    }

    #[tokio::test]
    async fn rejected_key_during_generation_is_credential_invalid() {
        let factory = MockAIProviderFactory::new(MockAIProvider::new()).rejecting("sk-bad");
        let provider = factory.provider().clone();
        let request = NarrativeRequest {
            system_instruction: "sys".to_string(),
            prompt: "plan".to_string(),
        };

        let err = service(factory)
            .generate(&key("sk-bad"), &request)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::CredentialInvalid);
        assert_eq!(provider.get_calls().len(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_is_service_error() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });
        let request = NarrativeRequest {
            system_instruction: "sys".to_string(),
            prompt: "plan".to_string(),
        };

        let err = service(MockAIProviderFactory::new(provider))
            .generate(&key("sk-ok"), &request)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ServiceError);
    }

    #[tokio::test]
    async fn generate_returns_provider_content() {
        let provider = MockAIProvider::new().with_response("Friday: lake walk");
        let request = NarrativeRequest {
            system_instruction: "sys".to_string(),
            prompt: "plan".to_string(),
        };

        let text = service(MockAIProviderFactory::new(provider.clone()))
            .generate(&key("sk-ok"), &request)
            .await
            .unwrap();

        assert_eq!(text, "Friday: lake walk");
        assert_eq!(provider.get_calls()[0].system_prompt.as_deref(), Some("sys"));
    }
}
