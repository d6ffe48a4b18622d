//! Meetup command handlers.
//!
//! Handlers that call the hosted LLM with a caller-supplied API key.
//! Keys are used for the duration of one request and never stored.

mod plan_meetup;
mod verify_credential;

pub use plan_meetup::{PlanMeetupCommand, PlanMeetupHandler, PlanMeetupResult};
pub use verify_credential::{VerifyCredentialCommand, VerifyCredentialHandler};

use secrecy::Secret;

use crate::domain::foundation::{CommunityError, ValidationError};
use crate::ports::ApiKey;

/// Wraps a raw key, rejecting blank input before any network call.
fn require_api_key(raw: &str) -> Result<ApiKey, CommunityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommunityError::invalid(ValidationError::empty_field("api_key")));
    }
    Ok(Secret::new(trimmed.to_string()))
}
