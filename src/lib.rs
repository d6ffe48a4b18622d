//! Community Finder - survey-driven community matching
//!
//! Places a respondent in one of the communities found by a pretrained
//! clustering model, compares that community with the rest of the surveyed
//! population, and drafts a meetup plan through a hosted LLM using the
//! respondent's own API key.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
