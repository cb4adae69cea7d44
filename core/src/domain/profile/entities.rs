use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

/// Health and dietary attributes of the single active user.
///
/// Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub health_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub dietary_preferences: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Display order of the setup form; the first entry is the default.
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown gender: {}", s.trim())))
    }
}

impl UserProfile {
    pub fn health_conditions_or_none(&self) -> String {
        join_or_none(&self.health_conditions)
    }

    pub fn allergies_or_none(&self) -> String {
        join_or_none(&self.allergies)
    }

    pub fn dietary_preferences_or_none(&self) -> String {
        join_or_none(&self.dietary_preferences)
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Mary".to_string(),
            age: 68,
            gender: Gender::Female,
            health_conditions: vec!["Diabetes".to_string(), "Hypertension".to_string()],
            allergies: vec![],
            dietary_preferences: vec!["Low Salt".to_string()],
        }
    }

    #[test]
    fn lists_render_joined_or_as_none() {
        let profile = profile();
        assert_eq!(profile.health_conditions_or_none(), "Diabetes, Hypertension");
        assert_eq!(profile.allergies_or_none(), "None");
        assert_eq!(profile.dietary_preferences_or_none(), "Low Salt");
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" MALE ".parse::<Gender>().unwrap(), Gender::Male);
        assert!(matches!(
            "unknown".parse::<Gender>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["healthConditions"][0], "Diabetes");
        assert_eq!(json["dietaryPreferences"][0], "Low Salt");
        assert_eq!(json["gender"], "Female");
    }
}
