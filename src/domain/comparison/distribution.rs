//! AttributeDistribution - per-category frequencies for one attribute.

use serde::Serialize;

use super::Group;
use crate::domain::survey::SurveyAttribute;

/// An observed category and how many rows chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: usize,
}

/// Category frequencies for one attribute, tallied separately per group.
///
/// Only observed categories appear; a category nobody in a group chose is
/// absent from that group's list rather than reported with a zero count.
/// Lists follow the attribute's canonical domain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDistribution {
    pub attribute: SurveyAttribute,
    pub target: Vec<CategoryCount>,
    pub other: Vec<CategoryCount>,
}

impl AttributeDistribution {
    /// Counts for one group.
    pub fn group(&self, group: Group) -> &[CategoryCount] {
        match group {
            Group::Target => &self.target,
            Group::Other => &self.other,
        }
    }

    /// Count of `category` in `group`, `None` if nobody in the group chose it.
    pub fn count(&self, group: Group, category: &str) -> Option<usize> {
        self.group(group)
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
    }

    /// Categories observed in `group`.
    pub fn categories(&self, group: Group) -> Vec<&'static str> {
        self.group(group).iter().map(|c| c.category).collect()
    }

    /// Sum of all counts in `group`.
    pub fn total(&self, group: Group) -> usize {
        self.group(group).iter().map(|c| c.count).sum()
    }
}
