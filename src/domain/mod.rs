//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `survey` - Survey answers, validation and typed records
//! - `population` - Labeled respondents used as the comparison baseline
//! - `comparison` - Pure cluster-versus-rest statistics
//! - `community` - Cluster names and descriptions
//! - `narrative` - Prompt assembly for the meetup planner

pub mod community;
pub mod comparison;
pub mod foundation;
pub mod narrative;
pub mod population;
pub mod survey;
