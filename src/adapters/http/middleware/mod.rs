//! HTTP middleware for axum.
//!
//! - `request_id` - UUID request ids propagated through `x-request-id`
//! - `layers` - the tower stack wrapped around the API router

mod layers;
mod request_id;

pub use layers::with_middleware;
pub use request_id::{MakeRequestUuid, REQUEST_ID_HEADER};
