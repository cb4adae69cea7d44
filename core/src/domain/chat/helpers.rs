use crate::domain::profile::entities::UserProfile;

/// Persona instruction sent alongside every chat message.
pub fn build_chat_persona(profile: &UserProfile, region: &str) -> String {
    format!(
        "You are NutriHelp, a compassionate and knowledgeable nutrition assistant for {region} seniors.\n\
         The user is {age} years old.\n\
         Health Conditions: {conditions}.\n\
         Allergies: {allergies}.\n\
         Keep answers concise, easy to read, and encouraging. Use metric units. \
         Prefer ingredients that are regionally available.",
        region = region,
        age = profile.age,
        conditions = profile.health_conditions_or_none(),
        allergies = profile.allergies_or_none(),
    )
}
