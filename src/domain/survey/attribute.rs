//! SurveyAttribute enum naming the five survey questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::categories::{AgeBracket, EducationLevel, FavouriteAnimals, FavouritePlace, Gender};
use crate::domain::foundation::ValidationError;

/// The five survey questions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyAttribute {
    Age,
    EduLevel,
    FavAnimals,
    FavPlace,
    Gender,
}

impl SurveyAttribute {
    /// Returns all attributes in canonical order.
    pub fn all() -> &'static [SurveyAttribute] {
        &[
            SurveyAttribute::Age,
            SurveyAttribute::EduLevel,
            SurveyAttribute::FavAnimals,
            SurveyAttribute::FavPlace,
            SurveyAttribute::Gender,
        ]
    }

    /// Returns the dataset column name.
    pub fn name(&self) -> &'static str {
        match self {
            SurveyAttribute::Age => AgeBracket::FIELD,
            SurveyAttribute::EduLevel => EducationLevel::FIELD,
            SurveyAttribute::FavAnimals => FavouriteAnimals::FIELD,
            SurveyAttribute::FavPlace => FavouritePlace::FIELD,
            SurveyAttribute::Gender => Gender::FIELD,
        }
    }

    /// Returns the display name (chart axis titles, form labels).
    pub fn display_name(&self) -> &'static str {
        match self {
            SurveyAttribute::Age => "Age",
            SurveyAttribute::EduLevel => "Education",
            SurveyAttribute::FavAnimals => "Favourite animals",
            SurveyAttribute::FavPlace => "Favourite place",
            SurveyAttribute::Gender => "Gender",
        }
    }

    /// Returns the allowed labels in canonical domain order.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            SurveyAttribute::Age => AgeBracket::all().iter().map(|v| v.label()).collect(),
            SurveyAttribute::EduLevel => EducationLevel::all().iter().map(|v| v.label()).collect(),
            SurveyAttribute::FavAnimals => {
                FavouriteAnimals::all().iter().map(|v| v.label()).collect()
            }
            SurveyAttribute::FavPlace => FavouritePlace::all().iter().map(|v| v.label()).collect(),
            SurveyAttribute::Gender => Gender::all().iter().map(|v| v.label()).collect(),
        }
    }

    /// Position of `label` in this attribute's domain, if it belongs to it.
    pub fn label_rank(&self, label: &str) -> Option<usize> {
        self.labels().iter().position(|l| *l == label)
    }
}

impl fmt::Display for SurveyAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurveyAttribute {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SurveyAttribute::all()
            .iter()
            .copied()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| ValidationError::not_in_domain("attribute", s))
    }
}
