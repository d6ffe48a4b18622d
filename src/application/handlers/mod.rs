//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod community;
pub mod meetup;

pub use community::{
    FindCommunityHandler, FindCommunityQuery, FindCommunityResult, GetDistributionHandler,
    GetDistributionQuery, GetDistributionResult,
};
pub use meetup::{
    PlanMeetupCommand, PlanMeetupHandler, PlanMeetupResult, VerifyCredentialCommand,
    VerifyCredentialHandler,
};
