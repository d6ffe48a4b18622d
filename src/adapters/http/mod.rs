//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter; [`api_router`] merges them.

pub mod community;
mod error;
pub mod meetup;
pub mod middleware;

use std::sync::Arc;

use axum::Router;

use crate::application::AppContext;

pub use community::community_routes;
pub use error::{status_for, ApiError, ErrorResponse, FieldProblem};
pub use meetup::meetup_routes;
pub use middleware::{with_middleware, MakeRequestUuid, REQUEST_ID_HEADER};

/// Builds the complete API router over a shared [`AppContext`].
pub fn api_router(context: Arc<AppContext>) -> Router {
    Router::new()
        .merge(community_routes(Arc::clone(&context)))
        .merge(meetup_routes(context))
}
