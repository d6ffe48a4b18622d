//! Narrative module - assembles the meetup-plan request for the LLM.

mod request;

pub use request::{NarrativeRequest, NarrativeRequestBuilder};
