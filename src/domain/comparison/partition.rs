//! GroupPartition - the two-way split of a population around one cluster.

use serde::Serialize;

use crate::domain::foundation::ClusterId;
use crate::domain::population::PopulationIndex;
use crate::domain::survey::ClusterAssignment;

/// The two comparison groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Rows labeled with the target cluster.
    Target,
    /// Every remaining row.
    Other,
}

impl Group {
    /// Returns both groups, target first.
    pub fn all() -> &'static [Group] {
        &[Group::Target, Group::Other]
    }

    /// Legend label shown next to the group's colour.
    pub fn label(&self) -> &'static str {
        match self {
            Group::Target => "Your community",
            Group::Other => "Other communities",
        }
    }

    /// Chart colour for the group.
    pub fn color(&self) -> &'static str {
        match self {
            Group::Target => "green",
            Group::Other => "gray",
        }
    }
}

/// Rows of a [`PopulationIndex`] split into target and other.
///
/// Borrows the index; rows keep their index order inside each group.
#[derive(Debug, Clone)]
pub struct GroupPartition<'a> {
    target_cluster: ClusterId,
    target: Vec<&'a ClusterAssignment>,
    other: Vec<&'a ClusterAssignment>,
}

impl<'a> GroupPartition<'a> {
    pub(super) fn split(index: &'a PopulationIndex, target_cluster: &ClusterId) -> Self {
        let (target, other): (Vec<_>, Vec<_>) = index
            .iter()
            .partition(|row| row.cluster_id() == target_cluster);

        Self {
            target_cluster: target_cluster.clone(),
            target,
            other,
        }
    }

    pub fn target_cluster(&self) -> &ClusterId {
        &self.target_cluster
    }

    /// Rows of one group.
    pub fn group(&self, group: Group) -> &[&'a ClusterAssignment] {
        match group {
            Group::Target => &self.target,
            Group::Other => &self.other,
        }
    }

    pub fn target(&self) -> &[&'a ClusterAssignment] {
        &self.target
    }

    pub fn other(&self) -> &[&'a ClusterAssignment] {
        &self.other
    }

    /// Number of rows across both groups.
    pub fn total(&self) -> usize {
        self.target.len() + self.other.len()
    }
}
