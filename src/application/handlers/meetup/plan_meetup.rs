//! PlanMeetupHandler - Command handler producing a weekend meetup plan.
//!
//! Order of work:
//! 1. Location, API key and survey answers are validated
//! 2. The submission is assigned and its community described
//! 3. The narrative request is assembled
//! 4. The plan is generated with the supplied key
//!
//! The key is not checked separately: a rejection from generation is
//! reported as `CredentialInvalid`. Nothing is retried.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use super::require_api_key;
use crate::application::AppContext;
use crate::domain::community::CommunityMetadata;
use crate::domain::foundation::{CommunityError, ValidationError};
use crate::domain::narrative::NarrativeRequestBuilder;
use crate::domain::survey::{ClusterAssignment, SurveyAnswers};

/// Command to plan a meetup for the submitter's community.
#[derive(Clone)]
pub struct PlanMeetupCommand {
    pub answers: SurveyAnswers,
    pub location: String,
    pub api_key: String,
}

impl std::fmt::Debug for PlanMeetupCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanMeetupCommand")
            .field("answers", &self.answers)
            .field("location", &self.location)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Generated plan plus the community it was written for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeetupResult {
    pub assignment: ClusterAssignment,
    pub community: CommunityMetadata,
    pub plan: String,
    pub generated_at: DateTime<Utc>,
}

pub struct PlanMeetupHandler {
    context: Arc<AppContext>,
}

impl PlanMeetupHandler {
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    pub async fn handle(&self, cmd: PlanMeetupCommand) -> Result<PlanMeetupResult, CommunityError> {
        let mut problems = Vec::new();
        if cmd.location.trim().is_empty() {
            problems.push(ValidationError::empty_field("location"));
        }
        let api_key = match require_api_key(&cmd.api_key) {
            Ok(key) => Some(key),
            Err(CommunityError::InvalidInput(mut found)) => {
                problems.append(&mut found);
                None
            }
            Err(other) => return Err(other),
        };
        let record = match cmd.answers.validate().into_result() {
            Ok(record) => Some(record),
            Err(CommunityError::InvalidInput(mut found)) => {
                problems.append(&mut found);
                None
            }
            Err(other) => return Err(other),
        };
        let (Some(api_key), Some(record)) = (api_key, record) else {
            return Err(CommunityError::InvalidInput(problems));
        };
        if !problems.is_empty() {
            return Err(CommunityError::InvalidInput(problems));
        }

        let assignment = self.context.assign(record).await?;
        let metadata = self.context.metadata().await?;
        let community = metadata.describe(assignment.cluster_id())?.clone();

        let request =
            NarrativeRequestBuilder::build(&record, &assignment, &community, &cmd.location)?;

        let plan = self.context.narrative().generate(&api_key, &request).await?;

        tracing::info!(cluster = %assignment.cluster_id(), "Meetup plan generated");

        Ok(PlanMeetupResult {
            assignment,
            community,
            plan,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        answers, cluster, CountingAssigner, StaticDataset, StaticMetadata, StaticModels,
        StubNarrative,
    };
    use crate::domain::foundation::ErrorCode;

    fn handler(
        assigner: CountingAssigner,
        narrative: Arc<StubNarrative>,
    ) -> (PlanMeetupHandler, Arc<CountingAssigner>) {
        let assigner = Arc::new(assigner);
        let context = Arc::new(AppContext::new(
            Arc::new(StaticModels::new(Arc::clone(&assigner))),
            "test_model",
            Arc::new(StaticDataset::new(vec![answers("25-34")])),
            Arc::new(StaticMetadata::covering(&["A", "B"])),
            narrative,
        ));
        (PlanMeetupHandler::new(context), assigner)
    }

    fn command(location: &str, api_key: &str) -> PlanMeetupCommand {
        PlanMeetupCommand {
            answers: answers("25-34"),
            location: location.to_string(),
            api_key: api_key.to_string(),
        }
    }

    #[tokio::test]
    async fn generates_plan_for_community() {
        let narrative = Arc::new(StubNarrative::accepting());
        let (handler, _) = handler(CountingAssigner::alternating(), narrative.clone());

        let result = handler.handle(command(" Gdańsk ", "sk-ok")).await.unwrap();

        assert_eq!(result.assignment.cluster_id(), &cluster("A"));
        assert_eq!(result.community.name, "Community A");
        assert!(result.plan.starts_with("Plan for"));

        let generated = narrative.generated();
        assert_eq!(generated.len(), 1);
        assert_eq!(generated[0].0, "sk-ok");
        assert!(generated[0].1.prompt.contains("Gdańsk"));
        assert!(generated[0].1.prompt.contains("Community A"));
        assert_eq!(narrative.verifications(), 0);
    }

    #[tokio::test]
    async fn missing_location_and_key_are_reported_together() {
        let narrative = Arc::new(StubNarrative::accepting());
        let (handler, assigner) = handler(CountingAssigner::alternating(), narrative.clone());

        let err = handler.handle(command("  ", "")).await.unwrap_err();

        match err {
            CommunityError::InvalidInput(problems) => {
                let fields: Vec<_> = problems.iter().map(|p| p.field().to_string()).collect();
                assert_eq!(fields, vec!["location", "api_key"]);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert_eq!(assigner.calls(), 0);
        assert_eq!(narrative.verifications(), 0);
    }

    #[tokio::test]
    async fn incomplete_answers_never_reach_model_or_service() {
        let narrative = Arc::new(StubNarrative::accepting());
        let (handler, assigner) = handler(CountingAssigner::alternating(), narrative.clone());
        let mut cmd = command("Kraków", "sk-ok");
        cmd.answers.gender = None;

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(assigner.calls(), 0);
        assert_eq!(narrative.verifications(), 0);
    }

    #[tokio::test]
    async fn rejected_key_surfaces_from_generation_without_a_separate_check() {
        let narrative = Arc::new(StubNarrative::rejecting());
        let (handler, _) = handler(CountingAssigner::alternating(), narrative.clone());

        let err = handler.handle(command("Kraków", "sk-bad")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::CredentialInvalid);
        assert_eq!(narrative.verifications(), 0);
        assert!(narrative.generated().is_empty());
        assert!(narrative.generated().is_empty());
    }

    #[tokio::test]
    async fn undescribed_cluster_is_unknown_cluster() {
        let narrative = Arc::new(StubNarrative::accepting());
        let (handler, _) = handler(CountingAssigner::fixed("C"), narrative.clone());

        let err = handler.handle(command("Kraków", "sk-ok")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::UnknownCluster);
        assert_eq!(narrative.verifications(), 0);
    }
}
