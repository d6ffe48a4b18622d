//! Survey module - the five-question demographic survey.
//!
//! - `SurveyAttribute` - names of the five questions, in canonical order
//! - `AgeBracket`, `EducationLevel`, ... - closed answer domains
//! - `SurveyAnswers` - raw answers before validation
//! - `SurveyRecord` - complete, typed answers (the only input the assigner accepts)
//! - `ClusterAssignment` - a record paired with its cluster

mod assignment;
mod attribute;
mod categories;
mod record;

pub use assignment::ClusterAssignment;
pub use attribute::SurveyAttribute;
pub use categories::{AgeBracket, EducationLevel, FavouriteAnimals, FavouritePlace, Gender};
pub use record::{SurveyAnswers, SurveyRecord, SurveyValidation};
