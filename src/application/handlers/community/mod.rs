//! Community query handlers.
//!
//! Read-only handlers that place a respondent in a community and compare
//! that community with the rest of the population.

mod find_community;
mod get_distribution;

pub use find_community::{FindCommunityHandler, FindCommunityQuery, FindCommunityResult};
pub use get_distribution::{GetDistributionHandler, GetDistributionQuery, GetDistributionResult};
