//! VerifyCredentialHandler - Command handler checking an LLM API key.

use std::sync::Arc;

use super::require_api_key;
use crate::domain::foundation::CommunityError;
use crate::ports::NarrativeService;

/// Command carrying the key to check.
#[derive(Clone)]
pub struct VerifyCredentialCommand {
    pub api_key: String,
}

impl std::fmt::Debug for VerifyCredentialCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyCredentialCommand")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Handler that sends the fixed check request with the supplied key.
pub struct VerifyCredentialHandler {
    narrative: Arc<dyn NarrativeService>,
}

impl VerifyCredentialHandler {
    pub fn new(narrative: Arc<dyn NarrativeService>) -> Self {
        Self { narrative }
    }

    pub async fn handle(&self, cmd: VerifyCredentialCommand) -> Result<(), CommunityError> {
        let api_key = require_api_key(&cmd.api_key)?;
        self.narrative.verify_credential(&api_key).await
    }
}
