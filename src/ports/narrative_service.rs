//! Narrative Service Port - meetup plan generation behind a credential.

use async_trait::async_trait;

use super::ApiKey;
use crate::domain::foundation::CommunityError;
use crate::domain::narrative::NarrativeRequest;

/// Generates narrative text from a prepared request.
///
/// Fails with `CredentialInvalid` when the service rejects the key and
/// `ServiceError` for any other upstream failure.
#[async_trait]
pub trait NarrativeService: Send + Sync {
    /// Sends a minimal fixed request to check the key is accepted.
    async fn verify_credential(&self, api_key: &ApiKey) -> Result<(), CommunityError>;

    /// Produces the narrative for `request` using `api_key`.
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &NarrativeRequest,
    ) -> Result<String, CommunityError>;
}
