use crate::domain::profile::entities::UserProfile;

/// Builds the meal plan prompt for `profile`.
pub fn build_meal_plan_prompt(profile: &UserProfile, region: &str) -> String {
    format!(
        "Create a personalized 1-day meal plan for a senior living in {region}.\n\
         Profile:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Health Conditions: {conditions}\n\
         - Allergies: {allergies}\n\
         - Preferences: {preferences}\n\
         \n\
         Focus on nutrient-dense foods available in {region} supermarkets. \
         Ensure recipes are easy to prepare.\n\
         Include Breakfast, Lunch, Dinner, and one Snack.\n\
         Return strictly JSON.",
        region = region,
        age = profile.age,
        gender = profile.gender,
        conditions = profile.health_conditions_or_none(),
        allergies = profile.allergies_or_none(),
        preferences = profile.dietary_preferences_or_none(),
    )
}
