//! Community HTTP adapter module.
//!
//! Survey options, community lookup and per-attribute distributions.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::community_routes;
