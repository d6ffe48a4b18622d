//! Survey Dataset Port - historical respondent rows.

use crate::domain::foundation::CommunityError;
use crate::domain::survey::SurveyAnswers;

/// Source of historical survey rows.
pub trait SurveyDataset: Send + Sync {
    /// Reads every row in file order. Missing cells come back as `None`.
    fn read_all(&self) -> Result<Vec<SurveyAnswers>, DatasetError>;
}

/// Errors reading the respondent dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("dataset is missing column '{0}'")]
    MissingColumn(String),

    #[error("dataset line {line} is malformed: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("dataset I/O error: {0}")]
    Io(String),
}

impl From<DatasetError> for CommunityError {
    fn from(err: DatasetError) -> Self {
        CommunityError::DataUnavailable(err.to_string())
    }
}
