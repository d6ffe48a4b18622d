//! HTTP handlers for meetup endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::adapters::http::ApiError;
use crate::application::{AppContext, PlanMeetupHandler, VerifyCredentialHandler};

use super::dto::{
    MeetupPlanRequest, MeetupPlanResponse, VerifyCredentialRequest, VerifyCredentialResponse,
};

/// POST /api/credentials/verify
///
/// Sends a minimal check with the supplied key. Nothing is stored.
pub async fn verify_credential(
    State(context): State<Arc<AppContext>>,
    body: Result<Json<VerifyCredentialRequest>, JsonRejection>,
) -> Result<Json<VerifyCredentialResponse>, ApiError> {
    let Json(request) = body?;

    let handler = VerifyCredentialHandler::new(context.narrative());
    handler.handle(request.into()).await?;

    Ok(Json(VerifyCredentialResponse { valid: true }))
}

/// POST /api/meetup-plan
///
/// Generates a meetup plan for the community the answers belong to.
pub async fn plan_meetup(
    State(context): State<Arc<AppContext>>,
    body: Result<Json<MeetupPlanRequest>, JsonRejection>,
) -> Result<Json<MeetupPlanResponse>, ApiError> {
    let Json(request) = body?;

    let handler = PlanMeetupHandler::new(context);
    let result = handler.handle(request.into()).await?;

    Ok(Json(MeetupPlanResponse::from(result)))
}
