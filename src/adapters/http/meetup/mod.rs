//! Meetup HTTP adapter module.
//!
//! Credential checks and meetup plan generation. API keys arrive in the
//! request body and are dropped once the response is sent.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::meetup_routes;
