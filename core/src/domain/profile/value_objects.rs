use validator::{Validate, ValidationError};

use crate::domain::profile::entities::Gender;

pub const MIN_AGE: u32 = 50;
pub const MAX_AGE: u32 = 120;
pub const DEFAULT_AGE: u32 = 65;

/// Raw answers from the profile setup form.
///
/// List fields hold the comma-separated text as typed.
#[derive(Debug, Clone, Validate)]
pub struct CreateProfileInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(range(min = 50, max = 120, message = "age must be between 50 and 120"))]
    pub age: u32,
    pub gender: Gender,
    pub health_conditions: String,
    pub allergies: String,
    pub dietary_preferences: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("name must not be empty".into());
        return Err(error);
    }
    Ok(())
}

/// Splits comma-separated form text into trimmed, non-empty tags.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
