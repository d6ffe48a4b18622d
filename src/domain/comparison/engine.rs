//! Cluster Comparison Engine - statistics comparing one cluster to the rest.

use serde::Serialize;
use std::collections::HashMap;

use super::{AttributeDistribution, CategoryCount, Group, GroupPartition};
use crate::domain::foundation::ClusterId;
use crate::domain::population::PopulationIndex;
use crate::domain::survey::{ClusterAssignment, SurveyAttribute};

/// Row counts of both groups; always sums to the population size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupProportions {
    pub target: usize,
    pub other: usize,
}

impl GroupProportions {
    /// Count for one group.
    pub fn get(&self, group: Group) -> usize {
        match group {
            Group::Target => self.target,
            Group::Other => self.other,
        }
    }

    pub fn total(&self) -> usize {
        self.target + self.other
    }

    /// Fraction of the population in the target group (0.0 when empty).
    pub fn share_of_target(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.target as f64 / total as f64,
        }
    }
}

/// Everything needed to chart one cluster against the population.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterComparison {
    pub target_cluster: ClusterId,
    pub target_count: usize,
    pub other_count: usize,
    pub proportions: GroupProportions,
    /// One entry per attribute, in canonical attribute order.
    pub distributions: Vec<AttributeDistribution>,
}

/// Comparison statistics over a population index.
///
/// Every function is pure: the result depends only on the index and the
/// target cluster. A target cluster that never occurs in the index yields
/// an empty target group rather than an error.
pub struct ClusterComparisonEngine;

impl ClusterComparisonEngine {
    /// Splits the index into target-cluster rows and all other rows.
    ///
    /// The groups are disjoint and together contain every row exactly once.
    pub fn partition<'a>(index: &'a PopulationIndex, target: &ClusterId) -> GroupPartition<'a> {
        GroupPartition::split(index, target)
    }

    /// Exact `(target_count, other_count)`.
    pub fn size_comparison(partition: &GroupPartition<'_>) -> (usize, usize) {
        (partition.target().len(), partition.other().len())
    }

    /// Group sizes for the share-of-whole chart.
    pub fn group_proportions(partition: &GroupPartition<'_>) -> GroupProportions {
        let (target, other) = Self::size_comparison(partition);
        GroupProportions { target, other }
    }

    /// Tallies `attribute` categories within each group independently.
    pub fn attribute_distribution(
        partition: &GroupPartition<'_>,
        attribute: SurveyAttribute,
    ) -> AttributeDistribution {
        AttributeDistribution {
            attribute,
            target: tally(partition.target(), attribute),
            other: tally(partition.other(), attribute),
        }
    }

    /// Runs every statistic for `target` in one pass over the partition.
    pub fn compare(index: &PopulationIndex, target: &ClusterId) -> ClusterComparison {
        let partition = Self::partition(index, target);
        let (target_count, other_count) = Self::size_comparison(&partition);

        ClusterComparison {
            target_cluster: target.clone(),
            target_count,
            other_count,
            proportions: Self::group_proportions(&partition),
            distributions: SurveyAttribute::all()
                .iter()
                .map(|attr| Self::attribute_distribution(&partition, *attr))
                .collect(),
        }
    }
}

/// Counts observed labels, emitted in the attribute's domain order.
fn tally(rows: &[&ClusterAssignment], attribute: SurveyAttribute) -> Vec<CategoryCount> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row.record().label(attribute)).or_insert(0) += 1;
    }

    attribute
        .labels()
        .into_iter()
        .filter_map(|category| {
            counts
                .get(category)
                .map(|&count| CategoryCount { category, count })
        })
        .collect()
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
