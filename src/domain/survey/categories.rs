//! Enumerated answer domains for the five survey questions.
//!
//! Labels are the exact strings used by the respondent dataset and the
//! model artifact, so they must not be translated or reformatted.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Generates a closed categorical domain with label conversions.
///
/// Each generated enum gets `FIELD`, `all()`, `label()`, `from_label()`,
/// `Display`, `FromStr` and label-based serde impls.
macro_rules! categorical_domain {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Dataset column holding this answer.
            pub const FIELD: &'static str = $field;

            /// Returns every member in canonical order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Returns the dataset label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Parses a dataset label, ignoring surrounding whitespace.
            pub fn from_label(label: &str) -> Result<Self, ValidationError> {
                let label = label.trim();
                if label.is_empty() {
                    return Err(ValidationError::empty_field(Self::FIELD));
                }
                match label {
                    $($label => Ok($name::$variant),)+
                    other => Err(ValidationError::not_in_domain(Self::FIELD, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::from_label(&raw).map_err(de::Error::custom)
            }
        }
    };
}

categorical_domain! {
    /// Age bracket. `unknown` is a regular answer, not a missing value.
    AgeBracket, "age" {
        Under18 => "<18",
        From18To24 => "18-24",
        From25To34 => "25-34",
        From35To44 => "35-44",
        From45To54 => "45-54",
        From55To64 => "55-64",
        Over65 => ">=65",
        Unknown => "unknown",
    }
}

categorical_domain! {
    /// Highest completed education.
    EducationLevel, "edu_level" {
        Primary => "Podstawowe",
        Secondary => "Średnie",
        Higher => "Wyższe",
    }
}

categorical_domain! {
    FavouriteAnimals, "fav_animals" {
        NoFavourites => "Brak ulubionych",
        Dogs => "Psy",
        Cats => "Koty",
        Other => "Inne",
        CatsAndDogs => "Koty i Psy",
    }
}

categorical_domain! {
    FavouritePlace, "fav_place" {
        ByTheWater => "Nad wodą",
        InTheForest => "W lesie",
        InTheMountains => "W górach",
        Other => "Inne",
    }
}

categorical_domain! {
    Gender, "gender" {
        Male => "Mężczyzna",
        Female => "Kobieta",
    }
}
