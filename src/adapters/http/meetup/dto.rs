//! Data transfer objects for meetup endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{PlanMeetupCommand, PlanMeetupResult, VerifyCredentialCommand};
use crate::domain::foundation::ClusterId;
use crate::domain::survey::SurveyAnswers;

/// Request body for POST /api/credentials/verify.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCredentialRequest {
    #[serde(default)]
    pub api_key: String,
}

impl From<VerifyCredentialRequest> for VerifyCredentialCommand {
    fn from(request: VerifyCredentialRequest) -> Self {
        VerifyCredentialCommand {
            api_key: request.api_key,
        }
    }
}

/// Response for a credential the AI service accepted.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyCredentialResponse {
    pub valid: bool,
}

/// Request body for POST /api/meetup-plan.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetupPlanRequest {
    #[serde(default)]
    pub answers: SurveyAnswers,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub api_key: String,
}

impl From<MeetupPlanRequest> for PlanMeetupCommand {
    fn from(request: MeetupPlanRequest) -> Self {
        PlanMeetupCommand {
            answers: request.answers,
            location: request.location,
            api_key: request.api_key,
        }
    }
}

/// Response for POST /api/meetup-plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetupPlanResponse {
    pub cluster_id: ClusterId,
    pub community_name: String,
    pub plan: String,
    pub generated_at: DateTime<Utc>,
}

impl From<PlanMeetupResult> for MeetupPlanResponse {
    fn from(result: PlanMeetupResult) -> Self {
        Self {
            cluster_id: result.assignment.cluster_id().clone(),
            community_name: result.community.name,
            plan: result.plan,
            generated_at: result.generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meetup_request_reads_camel_case_fields() {
        let json = r#"{
            "answers": {"age": "25-34", "gender": "Kobieta"},
            "location": "Kraków",
            "apiKey": "sk-test"
        }"#;
        let request: MeetupPlanRequest = serde_json::from_str(json).unwrap();
        let command = PlanMeetupCommand::from(request);

        assert_eq!(command.location, "Kraków");
        assert_eq!(command.api_key, "sk-test");
        assert_eq!(command.answers.age.as_deref(), Some("25-34"));
        assert!(command.answers.edu_level.is_none());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let request: MeetupPlanRequest = serde_json::from_str("{}").unwrap();
        assert!(request.location.is_empty());
        assert!(request.api_key.is_empty());
    }
}
