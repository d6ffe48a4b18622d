//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::ClusterId;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' does not accept '{value}'")]
    NotInDomain { field: String, value: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a validation error for a value outside the field's domain.
    pub fn not_in_domain(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::NotInDomain {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NotInDomain { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Stable error codes surfaced at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    ModelUnavailable,
    DataUnavailable,
    UnknownCluster,
    CredentialInvalid,
    ServiceError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ModelUnavailable => "MODEL_UNAVAILABLE",
            ErrorCode::DataUnavailable => "DATA_UNAVAILABLE",
            ErrorCode::UnknownCluster => "UNKNOWN_CLUSTER",
            ErrorCode::CredentialInvalid => "CREDENTIAL_INVALID",
            ErrorCode::ServiceError => "SERVICE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Every failure the community finder can report.
///
/// `InvalidInput` and `CredentialInvalid` are recoverable by the user
/// (fix the form, enter a new key). The remaining kinds end the current
/// interaction and are never retried automatically.
#[derive(Debug, Clone, Error)]
pub enum CommunityError {
    /// Malformed or incomplete survey data, location, or request field.
    #[error("invalid input: {}", format_problems(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The pretrained model artifact could not be located or parsed.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// The respondent dataset or metadata file could not be read.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// A cluster id has no metadata entry (deployment data bug).
    #[error("unknown cluster: {0}")]
    UnknownCluster(ClusterId),

    /// The LLM service rejected the supplied API key.
    #[error("credential rejected by the AI service")]
    CredentialInvalid,

    /// Any other failure of the LLM service.
    #[error("AI service error: {0}")]
    ServiceError(String),
}

impl CommunityError {
    /// Creates an invalid input error for a single problem.
    pub fn invalid(problem: ValidationError) -> Self {
        CommunityError::InvalidInput(vec![problem])
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CommunityError::InvalidInput(_) => ErrorCode::InvalidInput,
            CommunityError::ModelUnavailable(_) => ErrorCode::ModelUnavailable,
            CommunityError::DataUnavailable(_) => ErrorCode::DataUnavailable,
            CommunityError::UnknownCluster(_) => ErrorCode::UnknownCluster,
            CommunityError::CredentialInvalid => ErrorCode::CredentialInvalid,
            CommunityError::ServiceError(_) => ErrorCode::ServiceError,
        }
    }

    /// Message safe to show to the person using the service.
    ///
    /// Internal details (paths, upstream bodies) stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            CommunityError::InvalidInput(problems) => {
                format!("Please correct the form: {}", format_problems(problems))
            }
            CommunityError::ModelUnavailable(_) => {
                "The matching model is currently unavailable. Please try again later.".to_string()
            }
            CommunityError::DataUnavailable(_) => {
                "Community data is currently unavailable. Please try again later.".to_string()
            }
            CommunityError::UnknownCluster(_) => {
                "We matched you to a community we cannot describe yet. Please contact support."
                    .to_string()
            }
            CommunityError::CredentialInvalid => {
                "The API key you entered is invalid. Check it and try again.".to_string()
            }
            CommunityError::ServiceError(_) => {
                "The AI service failed to respond. Please try again later.".to_string()
            }
        }
    }

    /// Returns true if the user can fix the problem without operator help.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            CommunityError::InvalidInput(_) | CommunityError::CredentialInvalid
        )
    }
}

fn format_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
