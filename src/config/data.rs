//! Data file configuration (dataset, model artifact, metadata)

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locations of the files the service reads at warm-up.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Respondent dataset (delimited text with a header row)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Dataset field delimiter
    #[serde(default = "default_delimiter")]
    pub dataset_delimiter: String,

    /// Directory holding `<model_name>.json`
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// Name of the pretrained model artifact
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Community names and descriptions (JSON or YAML)
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,
}

impl DataConfig {
    /// Delimiter as the single byte the dataset reader expects
    pub fn delimiter_byte(&self) -> Result<u8, ValidationError> {
        match self.dataset_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ValidationError::InvalidDelimiter(
                self.dataset_delimiter.clone(),
            )),
        }
    }

    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATA__MODEL_NAME"));
        }
        if self.dataset_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("DATA__DATASET_PATH"));
        }
        if self.metadata_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("DATA__METADATA_PATH"));
        }
        self.delimiter_byte()?;
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            dataset_delimiter: default_delimiter(),
            model_dir: default_model_dir(),
            model_name: default_model_name(),
            metadata_path: default_metadata_path(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("welcome_survey_simple_v2.csv")
}

fn default_delimiter() -> String {
    ";".to_string()
}

fn default_model_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_model_name() -> String {
    "welcome_survey_clustering_pipeline_v2".to_string()
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from("welcome_survey_cluster_names_and_descriptions_v2.json")
}
