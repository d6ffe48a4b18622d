//! HTTP routes for meetup endpoints.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::{plan_meetup, verify_credential};
use crate::application::AppContext;

/// Creates the meetup router with all routes.
pub fn meetup_routes(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/credentials/verify", post(verify_credential))
        .route("/api/meetup-plan", post(plan_meetup))
        .with_state(context)
}
