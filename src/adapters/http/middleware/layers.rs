//! Tower layers applied around the whole API router.

use std::time::Duration;

use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router};
use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue, Method, Request};
use tower::timeout::error::Elapsed;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::request_id::{MakeRequestUuid, REQUEST_ID_HEADER};
use crate::adapters::http::ApiError;
use crate::domain::foundation::CommunityError;

/// Wraps `router` with request ids, tracing, CORS and a request timeout.
///
/// An empty `cors_origins` list allows any origin (development setups).
/// A request still running after `timeout` is dropped and answered with the
/// usual JSON error body (`SERVICE_ERROR`).
pub fn with_middleware(router: Router, timeout: Duration, cors_origins: &[String]) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(trace)
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(cors_layer(cors_origins))
            .layer(HandleErrorLayer::new(middleware_error))
            .timeout(timeout),
    )
}

async fn middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        return ApiError(CommunityError::ServiceError("request timed out".to_string()));
    }
    ApiError(CommunityError::ServiceError(format!("middleware failure: {}", err)))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
