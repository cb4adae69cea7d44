use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, meal_plan::entities::MealPlan,
    profile::entities::UserProfile,
};

/// Service trait for meal plan generation
pub trait MealPlanService: Send + Sync {
    /// Asks the AI service for a fresh one-day plan.
    ///
    /// Fails with `EmptyResponse` when nothing came back and with
    /// `MalformedResponse` when the reply does not fit the declared shape.
    /// Nothing is retried here.
    fn generate_meal_plan(
        &self,
        profile: &UserProfile,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}
