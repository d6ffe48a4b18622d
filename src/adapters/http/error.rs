//! API error type shared by every HTTP adapter.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CommunityError, ErrorCode, ValidationError};

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub problems: Vec<FieldProblem>,
}

/// One offending input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProblem {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldProblem {
    fn from(error: &ValidationError) -> Self {
        Self {
            field: error.field().to_string(),
            message: error.to_string(),
        }
    }
}

/// Wraps a [`CommunityError`] so handlers can return it directly.
///
/// The body carries the stable code and the user-facing message only;
/// internal detail is logged, never sent.
#[derive(Debug)]
pub struct ApiError(pub CommunityError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(self.0.code())
    }

    fn body(&self) -> ErrorResponse {
        let problems = match &self.0 {
            CommunityError::InvalidInput(problems) => problems.iter().map(FieldProblem::from).collect(),
            _ => Vec::new(),
        };
        ErrorResponse {
            code: self.0.code().to_string(),
            message: self.0.user_message(),
            problems,
        }
    }
}

/// HTTP status for each error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::CredentialInvalid => StatusCode::UNAUTHORIZED,
        ErrorCode::UnknownCluster => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::ModelUnavailable | ErrorCode::DataUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::ServiceError => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %self.0.code(), error = %self.0, "request failed");
        } else {
            tracing::debug!(code = %self.0.code(), error = %self.0, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<CommunityError> for ApiError {
    fn from(error: CommunityError) -> Self {
        ApiError(error)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError(CommunityError::invalid(error))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(CommunityError::invalid(ValidationError::invalid_format(
            "body",
            rejection.body_text(),
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(CommunityError::invalid(ValidationError::invalid_format(
            "path",
            rejection.body_text(),
        )))
    }
}
