use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::ports::LLMClient,
    meal_plan::{
        entities::MealPlan, helpers::build_meal_plan_prompt, ports::MealPlanService,
        schema::get_meal_plan_schema,
    },
    profile::{entities::UserProfile, ports::ProfileRepository},
};

impl<PR, LLM> MealPlanService for Service<PR, LLM>
where
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(age = profile.age))]
    async fn generate_meal_plan(&self, profile: &UserProfile) -> Result<MealPlan, CoreError> {
        let prompt = build_meal_plan_prompt(profile, &self.region);
        let response_schema = get_meal_plan_schema();

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, response_schema.clone())
            .await
            .inspect_err(|e| error!("Error generating meal plan: {}", e))?;

        response_schema.parse(&raw_response)
    }
}
