//! FindCommunityHandler - Query handler placing a submission in a community.
//!
//! Validates the answers before the model is touched, assigns the record,
//! looks up the community metadata and compares the community with the
//! rest of the population.

use serde::Serialize;
use std::sync::Arc;

use crate::application::AppContext;
use crate::domain::community::CommunityMetadata;
use crate::domain::comparison::{ClusterComparison, ClusterComparisonEngine};
use crate::domain::foundation::CommunityError;
use crate::domain::survey::{ClusterAssignment, SurveyAnswers};

/// Query carrying the raw survey answers.
#[derive(Debug, Clone)]
pub struct FindCommunityQuery {
    pub answers: SurveyAnswers,
}

/// Result of a successful community lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindCommunityResult {
    pub assignment: ClusterAssignment,
    pub community: CommunityMetadata,
    pub comparison: ClusterComparison,
}

/// Handler for finding a respondent's community.
pub struct FindCommunityHandler {
    context: Arc<AppContext>,
}

impl FindCommunityHandler {
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    pub async fn handle(
        &self,
        query: FindCommunityQuery,
    ) -> Result<FindCommunityResult, CommunityError> {
        let record = query.answers.validate().into_result()?;

        let assignment = self.context.assign(record).await?;
        let metadata = self.context.metadata().await?;
        let community = metadata.describe(assignment.cluster_id())?.clone();

        let population = self.context.population().await?;
        let comparison = ClusterComparisonEngine::compare(&population, assignment.cluster_id());

        Ok(FindCommunityResult {
            assignment,
            community,
            comparison,
        })
    }
}
