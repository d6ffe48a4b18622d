//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers (community lookups) are read-only; command handlers
//! (credential checks, meetup plans) call the external LLM service.

mod context;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::AppContext;
pub use handlers::{
    FindCommunityHandler, FindCommunityQuery, FindCommunityResult, GetDistributionHandler,
    GetDistributionQuery, GetDistributionResult, PlanMeetupCommand, PlanMeetupHandler,
    PlanMeetupResult, VerifyCredentialCommand, VerifyCredentialHandler,
};
