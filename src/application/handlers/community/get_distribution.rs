//! GetDistributionHandler - Query handler for one attribute distribution.

use std::sync::Arc;

use crate::application::AppContext;
use crate::domain::comparison::{AttributeDistribution, ClusterComparisonEngine};
use crate::domain::foundation::{ClusterId, CommunityError};
use crate::domain::survey::SurveyAttribute;

/// Query for the distribution of `attribute` in `cluster_id` versus the rest.
#[derive(Debug, Clone)]
pub struct GetDistributionQuery {
    pub cluster_id: ClusterId,
    pub attribute: SurveyAttribute,
}

pub type GetDistributionResult = AttributeDistribution;

/// Handler for single-attribute distributions.
///
/// Only clusters with metadata can be queried, so callers cannot enumerate
/// labels the deployment does not describe.
pub struct GetDistributionHandler {
    context: Arc<AppContext>,
}

impl GetDistributionHandler {
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    pub async fn handle(
        &self,
        query: GetDistributionQuery,
    ) -> Result<GetDistributionResult, CommunityError> {
        self.context.metadata().await?.describe(&query.cluster_id)?;

        let population = self.context.population().await?;
        let partition = ClusterComparisonEngine::partition(&population, &query.cluster_id);
        Ok(ClusterComparisonEngine::attribute_distribution(
            &partition,
            query.attribute,
        ))
    }
}
