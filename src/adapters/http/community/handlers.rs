//! HTTP handlers for community endpoints.
//!
//! These handlers connect Axum routes to the community query handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use serde_json::{json, Value};

use crate::application::{
    AppContext, FindCommunityHandler, FindCommunityQuery, GetDistributionHandler,
    GetDistributionQuery,
};
use crate::domain::foundation::ClusterId;
use crate::domain::survey::{SurveyAnswers, SurveyAttribute};

use super::dto::{CommunityResponse, DistributionResponse, GroupLegend, SurveyOptionsResponse};
use crate::adapters::http::ApiError;

/// GET /health
pub async fn health(State(context): State<Arc<AppContext>>) -> Json<Value> {
    Json(json!({ "status": "ok", "warm": context.is_warm() }))
}

/// GET /api/survey/options
///
/// Allowed answers for each survey question plus the chart legend.
pub async fn survey_options() -> Json<SurveyOptionsResponse> {
    Json(SurveyOptionsResponse::build())
}

/// POST /api/community
///
/// Places the submitted answers in a community and compares it with the
/// rest of the population.
pub async fn find_community(
    State(context): State<Arc<AppContext>>,
    body: Result<Json<SurveyAnswers>, JsonRejection>,
) -> Result<Json<CommunityResponse>, ApiError> {
    let Json(answers) = body?;

    let handler = FindCommunityHandler::new(context);
    let result = handler.handle(FindCommunityQuery { answers }).await?;

    tracing::info!(cluster_id = %result.assignment.cluster_id(), "community found");
    Ok(Json(CommunityResponse::from(result)))
}

/// GET /api/community/:cluster_id/distribution/:attribute
///
/// Distribution of one attribute inside the cluster versus everyone else.
pub async fn get_distribution(
    State(context): State<Arc<AppContext>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<DistributionResponse>, ApiError> {
    let Path((cluster_id_str, attribute_str)) = path?;

    let cluster_id: ClusterId = cluster_id_str.parse()?;
    let attribute: SurveyAttribute = attribute_str.parse()?;

    let handler = GetDistributionHandler::new(context);
    let distribution = handler
        .handle(GetDistributionQuery {
            cluster_id: cluster_id.clone(),
            attribute,
        })
        .await?;

    Ok(Json(DistributionResponse {
        cluster_id,
        distribution: distribution.into(),
        legend: GroupLegend::all(),
    }))
}
