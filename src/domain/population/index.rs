//! PopulationIndex - the labeled respondent dataset.

use crate::domain::foundation::{ClusterId, CommunityError};
use crate::domain::survey::{ClusterAssignment, SurveyRecord};

/// Ordered collection of labeled respondents.
///
/// Built once per process by the population loader and shared read-only
/// afterwards; there is no API to mutate rows after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationIndex {
    rows: Vec<ClusterAssignment>,
}

impl PopulationIndex {
    /// Creates an index from already-labeled rows.
    pub fn new(rows: Vec<ClusterAssignment>) -> Self {
        Self { rows }
    }

    /// Zips records with the labels the assigner produced for them.
    ///
    /// The assigner must return exactly one label per record; anything else
    /// means the model is broken and is reported as `ModelUnavailable`.
    pub fn from_labels(
        records: Vec<SurveyRecord>,
        labels: Vec<ClusterId>,
    ) -> Result<Self, CommunityError> {
        if records.len() != labels.len() {
            return Err(CommunityError::ModelUnavailable(format!(
                "model returned {} labels for {} records",
                labels.len(),
                records.len()
            )));
        }

        let rows = records
            .into_iter()
            .zip(labels)
            .map(|(record, cluster_id)| ClusterAssignment::new(record, cluster_id))
            .collect();

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ClusterAssignment] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClusterAssignment> {
        self.rows.iter()
    }

    /// Distinct cluster ids in first-seen order.
    pub fn cluster_ids(&self) -> Vec<ClusterId> {
        self.cluster_sizes().into_iter().map(|(id, _)| id).collect()
    }

    /// Member count per cluster, in first-seen order.
    pub fn cluster_sizes(&self) -> Vec<(ClusterId, usize)> {
        let mut sizes: Vec<(ClusterId, usize)> = Vec::new();
        for row in &self.rows {
            match sizes.iter_mut().find(|(id, _)| id == row.cluster_id()) {
                Some((_, count)) => *count += 1,
                None => sizes.push((row.cluster_id().clone(), 1)),
            }
        }
        sizes
    }

    /// Returns true if at least one row carries `cluster_id`.
    pub fn contains_cluster(&self, cluster_id: &ClusterId) -> bool {
        self.rows.iter().any(|row| row.cluster_id() == cluster_id)
    }
}

impl FromIterator<ClusterAssignment> for PopulationIndex {
    fn from_iter<I: IntoIterator<Item = ClusterAssignment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
