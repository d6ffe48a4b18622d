//! Data transfer objects for community endpoints.

use serde::Serialize;

use crate::application::{FindCommunityResult, GetDistributionResult};
use crate::domain::comparison::{CategoryCount, ClusterComparison, Group, GroupProportions};
use crate::domain::foundation::ClusterId;
use crate::domain::survey::{SurveyAttribute, SurveyRecord};

/// Legend entry for one comparison group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupLegend {
    pub group: Group,
    pub label: &'static str,
    pub color: &'static str,
}

impl GroupLegend {
    pub fn all() -> Vec<GroupLegend> {
        Group::all()
            .iter()
            .map(|group| GroupLegend {
                group: *group,
                label: group.label(),
                color: group.color(),
            })
            .collect()
    }
}

/// Allowed answers for one survey question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOptions {
    pub attribute: SurveyAttribute,
    pub display_name: &'static str,
    pub options: Vec<&'static str>,
}

/// Response for GET /api/survey/options.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyOptionsResponse {
    pub attributes: Vec<AttributeOptions>,
    pub legend: Vec<GroupLegend>,
}

impl SurveyOptionsResponse {
    pub fn build() -> Self {
        Self {
            attributes: SurveyAttribute::all()
                .iter()
                .map(|attribute| AttributeOptions {
                    attribute: *attribute,
                    display_name: attribute.display_name(),
                    options: attribute.labels(),
                })
                .collect(),
            legend: GroupLegend::all(),
        }
    }
}

/// Distribution for one attribute, labelled for charting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionView {
    pub attribute: SurveyAttribute,
    pub display_name: &'static str,
    pub target: Vec<CategoryCount>,
    pub other: Vec<CategoryCount>,
}

impl From<GetDistributionResult> for DistributionView {
    fn from(distribution: GetDistributionResult) -> Self {
        Self {
            attribute: distribution.attribute,
            display_name: distribution.attribute.display_name(),
            target: distribution.target,
            other: distribution.other,
        }
    }
}

/// Response for GET /api/community/:cluster_id/distribution/:attribute.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResponse {
    pub cluster_id: ClusterId,
    pub distribution: DistributionView,
    pub legend: Vec<GroupLegend>,
}

/// Response for POST /api/community.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityResponse {
    pub cluster_id: ClusterId,
    pub name: String,
    pub description: String,
    pub answers: SurveyRecord,
    pub target_count: usize,
    pub other_count: usize,
    pub proportions: GroupProportions,
    pub distributions: Vec<DistributionView>,
    pub legend: Vec<GroupLegend>,
}

impl From<FindCommunityResult> for CommunityResponse {
    fn from(result: FindCommunityResult) -> Self {
        let ClusterComparison {
            target_count,
            other_count,
            proportions,
            distributions,
            ..
        } = result.comparison;

        Self {
            cluster_id: result.assignment.cluster_id().clone(),
            name: result.community.name,
            description: result.community.description,
            answers: *result.assignment.record(),
            target_count,
            other_count,
            proportions,
            distributions: distributions.into_iter().map(DistributionView::from).collect(),
            legend: GroupLegend::all(),
        }
    }
}
