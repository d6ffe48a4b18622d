//! Population module - every historical respondent with its cluster label.

mod index;

pub use index::PopulationIndex;
