use crate::domain::profile::entities::UserProfile;

pub fn build_scan_prompt(profile: &UserProfile) -> String {
    format!(
        "Analyze this image of a food product label or meal.\n\
         Evaluate if it is suitable for this user based on their profile:\n\
         - Health Conditions: {conditions}\n\
         - Allergies: {allergies}\n\
         \n\
         Identify the product name.\n\
         Determine if it is 'Safe', 'Caution' (consume in moderation), or 'Danger' (avoid).\n\
         Provide a clear reasoning for a senior citizen.",
        conditions = profile.health_conditions_or_none(),
        allergies = profile.allergies_or_none(),
    )
}
