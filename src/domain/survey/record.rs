//! Raw survey answers and the validated SurveyRecord.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::categories::{AgeBracket, EducationLevel, FavouriteAnimals, FavouritePlace, Gender};
use super::SurveyAttribute;
use crate::domain::foundation::{CommunityError, ValidationError};

/// Unvalidated answers as submitted by a form or read from a dataset row.
///
/// A missing answer is `None`; blank strings are treated as missing too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyAnswers {
    pub age: Option<String>,
    pub edu_level: Option<String>,
    pub fav_animals: Option<String>,
    pub fav_place: Option<String>,
    pub gender: Option<String>,
}

impl SurveyAnswers {
    /// Returns the raw answer for an attribute, `None` when missing or blank.
    pub fn get(&self, attribute: SurveyAttribute) -> Option<&str> {
        let value = match attribute {
            SurveyAttribute::Age => &self.age,
            SurveyAttribute::EduLevel => &self.edu_level,
            SurveyAttribute::FavAnimals => &self.fav_animals,
            SurveyAttribute::FavPlace => &self.fav_place,
            SurveyAttribute::Gender => &self.gender,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Sets the answer for an attribute.
    pub fn set(&mut self, attribute: SurveyAttribute, value: impl Into<String>) {
        let slot = match attribute {
            SurveyAttribute::Age => &mut self.age,
            SurveyAttribute::EduLevel => &mut self.edu_level,
            SurveyAttribute::FavAnimals => &mut self.fav_animals,
            SurveyAttribute::FavPlace => &mut self.fav_place,
            SurveyAttribute::Gender => &mut self.gender,
        };
        *slot = Some(value.into());
    }

    /// Builder-style variant of [`SurveyAnswers::set`].
    pub fn with(mut self, attribute: SurveyAttribute, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }

    /// Attributes with no usable answer.
    pub fn missing(&self) -> Vec<SurveyAttribute> {
        SurveyAttribute::all()
            .iter()
            .copied()
            .filter(|attr| self.get(*attr).is_none())
            .collect()
    }

    /// Runs the completeness predicate.
    pub fn validate(&self) -> SurveyValidation {
        SurveyRecord::validate(self)
    }
}

/// Outcome of the completeness predicate over [`SurveyAnswers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyValidation {
    /// Every answer is present and inside its domain.
    Valid(SurveyRecord),
    /// One problem per offending attribute, in canonical attribute order.
    Invalid(Vec<ValidationError>),
}

impl SurveyValidation {
    /// Returns true if the answers form a complete record.
    pub fn is_valid(&self) -> bool {
        matches!(self, SurveyValidation::Valid(_))
    }

    /// Converts into a result, mapping problems to `InvalidInput`.
    pub fn into_result(self) -> Result<SurveyRecord, CommunityError> {
        match self {
            SurveyValidation::Valid(record) => Ok(record),
            SurveyValidation::Invalid(problems) => Err(CommunityError::InvalidInput(problems)),
        }
    }
}

/// One respondent's complete, typed answers.
///
/// Only constructible with every field set, so an incomplete record can
/// never reach the cluster assigner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurveyRecord {
    age: AgeBracket,
    edu_level: EducationLevel,
    fav_animals: FavouriteAnimals,
    fav_place: FavouritePlace,
    gender: Gender,
}

impl SurveyRecord {
    /// Creates a record from typed answers.
    pub fn new(
        age: AgeBracket,
        edu_level: EducationLevel,
        fav_animals: FavouriteAnimals,
        fav_place: FavouritePlace,
        gender: Gender,
    ) -> Self {
        Self {
            age,
            edu_level,
            fav_animals,
            fav_place,
            gender,
        }
    }

    /// Checks raw answers and collects every problem at once.
    pub fn validate(answers: &SurveyAnswers) -> SurveyValidation {
        let mut problems = Vec::new();
        let raw = move |attribute: SurveyAttribute| answers.get(attribute).unwrap_or("");

        let age = collect(AgeBracket::from_label(raw(SurveyAttribute::Age)), &mut problems);
        let edu_level = collect(
            EducationLevel::from_label(raw(SurveyAttribute::EduLevel)),
            &mut problems,
        );
        let fav_animals = collect(
            FavouriteAnimals::from_label(raw(SurveyAttribute::FavAnimals)),
            &mut problems,
        );
        let fav_place = collect(
            FavouritePlace::from_label(raw(SurveyAttribute::FavPlace)),
            &mut problems,
        );
        let gender = collect(Gender::from_label(raw(SurveyAttribute::Gender)), &mut problems);

        match (age, edu_level, fav_animals, fav_place, gender) {
            (Some(age), Some(edu_level), Some(fav_animals), Some(fav_place), Some(gender)) => {
                SurveyValidation::Valid(Self::new(age, edu_level, fav_animals, fav_place, gender))
            }
            _ => SurveyValidation::Invalid(problems),
        }
    }

    pub fn age(&self) -> AgeBracket {
        self.age
    }

    pub fn edu_level(&self) -> EducationLevel {
        self.edu_level
    }

    pub fn fav_animals(&self) -> FavouriteAnimals {
        self.fav_animals
    }

    pub fn fav_place(&self) -> FavouritePlace {
        self.fav_place
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the dataset label of one answer.
    pub fn label(&self, attribute: SurveyAttribute) -> &'static str {
        match attribute {
            SurveyAttribute::Age => self.age.label(),
            SurveyAttribute::EduLevel => self.edu_level.label(),
            SurveyAttribute::FavAnimals => self.fav_animals.label(),
            SurveyAttribute::FavPlace => self.fav_place.label(),
            SurveyAttribute::Gender => self.gender.label(),
        }
    }

    /// Converts back to raw answers.
    pub fn to_answers(&self) -> SurveyAnswers {
        SurveyAttribute::all()
            .iter()
            .fold(SurveyAnswers::default(), |answers, attr| {
                answers.with(*attr, self.label(*attr))
            })
    }
}

impl TryFrom<&SurveyAnswers> for SurveyRecord {
    type Error = CommunityError;

    fn try_from(answers: &SurveyAnswers) -> Result<Self, Self::Error> {
        SurveyRecord::validate(answers).into_result()
    }
}

impl fmt::Display for SurveyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = SurveyAttribute::all()
            .iter()
            .map(|attr| format!("{}: {}", attr.name(), self.label(*attr)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

fn collect<T>(result: Result<T, ValidationError>, problems: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(problem) => {
            problems.push(problem);
            None
        }
    }
}
