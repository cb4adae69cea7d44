use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::entities::MealPlan,
    views::request_state::{RequestFailure, RequestState},
};

pub const PLAN_FAILURE_MESSAGE: &str = "Unable to generate meal plan. Please check your connection.";

/// State behind the Meals tab.
#[derive(Debug, Clone, Default)]
pub struct PlanView {
    state: RequestState<MealPlan>,
    expanded: Option<usize>,
    started: bool,
}

impl PlanView {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first generation has been started.
    pub fn needs_initial_request(&self) -> bool {
        !self.started
    }

    pub fn begin_generation(&mut self) -> Result<(), CoreError> {
        self.state.begin()?;
        self.started = true;
        self.expanded = None;
        Ok(())
    }

    /// "Try Again" after a failure.
    pub fn try_again(&mut self) -> Result<(), CoreError> {
        self.state.retry();
        self.begin_generation()
    }

    pub fn finish(&mut self, outcome: Result<MealPlan, CoreError>) -> bool {
        self.state.complete(outcome, PLAN_FAILURE_MESSAGE)
    }

    /// Opens the recipe at `index`, or closes it when it is already open.
    pub fn toggle(&mut self, index: usize) {
        let in_range = self.plan().is_some_and(|plan| index < plan.meals.len());
        if !in_range {
            return;
        }
        self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn plan(&self) -> Option<&MealPlan> {
        self.state.value()
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        self.state.failure()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn state(&self) -> &RequestState<MealPlan> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{common::test_support::recipe, meal_plan::entities::MealType};

    fn plan() -> MealPlan {
        MealPlan {
            date: "Today".to_string(),
            meals: vec![
                recipe("Porridge", MealType::Breakfast),
                recipe("Soup", MealType::Lunch),
            ],
            daily_tips: vec!["Stay hydrated".to_string()],
        }
    }

    #[test]
    fn first_display_requests_once() {
        let mut view = PlanView::new();
        assert!(view.needs_initial_request());
        view.begin_generation().unwrap();
        assert!(!view.needs_initial_request());
        assert!(view.is_loading());
        assert_eq!(view.begin_generation(), Err(CoreError::RequestInFlight));
    }

    #[test]
    fn failure_carries_the_fixed_message_and_detail() {
        let mut view = PlanView::new();
        view.begin_generation().unwrap();
        view.finish(Err(CoreError::ExternalServiceError("offline".to_string())));

        let failure = view.failure().unwrap();
        assert_eq!(failure.message, PLAN_FAILURE_MESSAGE);
        assert_eq!(
            failure.detail,
            CoreError::ExternalServiceError("offline".to_string())
        );

        view.try_again().unwrap();
        assert!(view.is_loading());
    }

    #[test]
    fn toggle_opens_and_closes_a_recipe() {
        let mut view = PlanView::new();
        view.begin_generation().unwrap();
        view.finish(Ok(plan()));

        view.toggle(1);
        assert_eq!(view.expanded(), Some(1));
        view.toggle(0);
        assert_eq!(view.expanded(), Some(0));
        view.toggle(0);
        assert_eq!(view.expanded(), None);
        view.toggle(5);
        assert_eq!(view.expanded(), None);
    }

    #[test]
    fn regeneration_collapses_the_open_recipe() {
        let mut view = PlanView::new();
        view.begin_generation().unwrap();
        view.finish(Ok(plan()));
        view.toggle(0);

        view.begin_generation().unwrap();
        assert_eq!(view.expanded(), None);
        assert!(view.plan().is_none());
    }
}
