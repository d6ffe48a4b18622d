//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Label of a precomputed cluster (e.g. `Cluster 0`).
///
/// The label is opaque: it comes from the model artifact and is only ever
/// compared for equality and used as a metadata key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClusterId(String);

impl ClusterId {
    /// Creates a new ClusterId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("cluster_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClusterId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClusterId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClusterId> for String {
    fn from(id: ClusterId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_id_accepts_label() {
        let id = ClusterId::new("Cluster 0").unwrap();
        assert_eq!(id.as_str(), "Cluster 0");
    }

    #[test]
    fn cluster_id_trims_whitespace() {
        let id: ClusterId = "  Cluster 2 ".parse().unwrap();
        assert_eq!(id.as_str(), "Cluster 2");
    }

    #[test]
    fn cluster_id_rejects_blank_string() {
        match ClusterId::new("   ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "cluster_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn cluster_id_serializes_as_plain_string() {
        let id = ClusterId::new("Cluster 1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Cluster 1\"");

        let back: ClusterId = serde_json::from_str("\"Cluster 1\"").unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ClusterId>("\"\"").is_err());
    }
}
