//! HTTP routes for community endpoints.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{find_community, get_distribution, health, survey_options};
use crate::application::AppContext;

/// Creates the community router with all routes.
pub fn community_routes(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/survey/options", get(survey_options))
        .route("/api/community", post(find_community))
        .route(
            "/api/community/:cluster_id/distribution/:attribute",
            get(get_distribution),
        )
        .with_state(context)
}
