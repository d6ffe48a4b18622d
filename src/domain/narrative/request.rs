//! NarrativeRequest and its builder.

use serde::Serialize;

use crate::domain::community::CommunityMetadata;
use crate::domain::foundation::{CommunityError, ValidationError};
use crate::domain::survey::{ClusterAssignment, SurveyAttribute, SurveyRecord};

const PLANNER_INSTRUCTION: &str = "\
You write with humour but always stay factual and fully professional. \
You are a travel-industry expert with 15 years of experience. \
You help organise a meetup for a group of people who met through shared interests. \
When you are being funny, underline it with emoji. \
Every place you propose must be real.";

const CHECK_INSTRUCTION: &str = "API key validation request.";
const CHECK_PROMPT: &str = "Does my API key work?";

/// System instruction plus a single user prompt for the LLM service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeRequest {
    pub system_instruction: String,
    pub prompt: String,
}

/// Builds narrative requests from a respondent's community assignment.
///
/// The prompt is a fixed template; the LLM output is never validated.
pub struct NarrativeRequestBuilder;

impl NarrativeRequestBuilder {
    /// Assembles the weekend-meetup request.
    ///
    /// `location` is trimmed and must not be empty.
    pub fn build(
        record: &SurveyRecord,
        assignment: &ClusterAssignment,
        metadata: &CommunityMetadata,
        location: &str,
    ) -> Result<NarrativeRequest, CommunityError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(CommunityError::invalid(ValidationError::empty_field(
                "location",
            )));
        }

        let profile = SurveyAttribute::all()
            .iter()
            .map(|attr| format!("- {}: {}", attr.display_name(), record.label(*attr)))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!(
            "Start by greeting the user and thanking them for using this application.\n\
             \n\
             Base your answer on the following data:\n\
             Place where the organiser would like to hold the group meetup: {location}\n\
             Organiser profile:\n{profile}\n\
             Community ({cluster}) name: {name}\n\
             Community description: {description}\n\
             \n\
             Say something about the community: what characterises it, what it enjoys and \
             which activities and places suit such people.\n\
             \n\
             Starting from {location}, propose an attractive and unusual meeting place nearby. \
             If there is nothing interesting nearby, propose a coach or flight to a more \
             attractive destination.\n\
             Present a plan of integration activities for people who have just met, with \
             memorable entertainment for adults. Plan the whole weekend, Friday to Sunday, \
             covering each day and evening.\n\
             \n\
             Finish by thanking the user again, invite them to contact the travel agency you \
             represent and close with its business card.",
            location = location,
            profile = profile,
            cluster = assignment.cluster_id(),
            name = metadata.name,
            description = metadata.description,
        );

        Ok(NarrativeRequest {
            system_instruction: PLANNER_INSTRUCTION.to_string(),
            prompt,
        })
    }

    /// Minimal request used to check that a credential is accepted.
    pub fn credential_check() -> NarrativeRequest {
        NarrativeRequest {
            system_instruction: CHECK_INSTRUCTION.to_string(),
            prompt: CHECK_PROMPT.to_string(),
        }
    }
}
