//! ClusterAssignment - a record paired with the cluster it was assigned to.

use serde::Serialize;

use super::SurveyRecord;
use crate::domain::foundation::ClusterId;

/// A survey record with its assigned cluster.
///
/// Produced once per submission by the cluster assigner and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAssignment {
    record: SurveyRecord,
    cluster_id: ClusterId,
}

impl ClusterAssignment {
    pub fn new(record: SurveyRecord, cluster_id: ClusterId) -> Self {
        Self { record, cluster_id }
    }

    pub fn record(&self) -> &SurveyRecord {
        &self.record
    }

    pub fn cluster_id(&self) -> &ClusterId {
        &self.cluster_id
    }
}
