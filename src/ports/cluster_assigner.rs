//! Cluster Assigner Port - pretrained clustering model boundary.
//!
//! The model is an opaque pretrained artifact. The application only needs
//! to load it by name and ask it for one cluster label per record.

use std::sync::Arc;

use crate::domain::foundation::{ClusterId, CommunityError, ValidationError};
use crate::domain::survey::{SurveyAnswers, SurveyRecord};

/// Maps complete survey records to cluster labels.
///
/// Implementations must be deterministic for a fixed artifact and input and
/// free of side effects, so they can be shared across threads.
pub trait ClusterAssigner: Send + Sync {
    /// Returns one cluster id per record, in input order.
    fn assign(&self, records: &[SurveyRecord]) -> Result<Vec<ClusterId>, AssignmentError>;

    /// Fills missing answers of a historical dataset row.
    ///
    /// Only ever applied to dataset rows; live submissions must be complete.
    /// The default leaves the answers untouched.
    fn impute(&self, answers: SurveyAnswers) -> SurveyAnswers {
        answers
    }
}

/// Locates and deserializes pretrained model artifacts.
pub trait ModelRepository: Send + Sync {
    /// Loads the artifact registered under `name`.
    fn load(&self, name: &str) -> Result<Arc<dyn ClusterAssigner>, AssignmentError>;
}

/// Errors from loading or running the clustering model.
#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    /// No artifact exists under the requested name.
    #[error("model artifact not found: {0}")]
    NotFound(String),

    /// The artifact exists but cannot be read or parsed.
    #[error("model artifact is malformed: {0}")]
    Malformed(String),

    /// A record could not be encoded for inference.
    #[error("record cannot be encoded: {0}")]
    Encoding(String),
}

impl AssignmentError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

impl From<AssignmentError> for CommunityError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::Encoding(reason) => {
                CommunityError::invalid(ValidationError::invalid_format("record", reason))
            }
            other => CommunityError::ModelUnavailable(other.to_string()),
        }
    }
}
