//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! community finder domain.

mod errors;
mod ids;

pub use errors::{CommunityError, ErrorCode, ValidationError};
pub use ids::ClusterId;
