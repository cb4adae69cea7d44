use std::sync::Arc;

use colored::Colorize;
use nutrihelp_core::domain::{
    common::entities::app_errors::CoreError, meal_plan::ports::MealPlanService, shell::Tab,
};

use super::{Flow, MenuChoice, Terminal, render, spinner};

impl Terminal {
    pub(super) async fn meals_tab(&mut self) -> anyhow::Result<Flow> {
        let needs_request = self
            .shell
            .session()
            .is_some_and(|session| session.plan.needs_initial_request());
        if needs_request {
            self.start_plan()?;
        }

        self.print_tab_header(Tab::Plan);
        let Some(session) = self.shell.session() else {
            return Ok(Flow::Continue);
        };
        let view = &session.plan;

        let mut actions = Vec::new();
        if view.is_loading() {
            println!("{}", "Chef Gemini is preparing your personalized menu...".green());
            actions.push("Wait for the menu".to_string());
        } else if let Some(failure) = view.failure() {
            print!("{}", render::failure(failure));
            actions.push("Try Again".to_string());
        } else if let Some(plan) = view.plan() {
            println!("{}", "Your Daily Menu".bold());
            print!("{}", render::plan(plan, view.expanded()));
            actions.push("Regenerate Menu".to_string());
            actions.extend(plan.meals.iter().enumerate().map(|(index, meal)| {
                let verb = if view.expanded() == Some(index) { "Hide" } else { "Show" };
                format!("{} {} recipe", verb, meal.name)
            }));
        }

        let choice = self.menu(Tab::Plan, &actions)?;
        let MenuChoice::Action(index) = choice else {
            return self.navigate(choice).await;
        };

        let Some(session) = self.shell.session_mut() else {
            return Ok(Flow::Continue);
        };
        if session.plan.is_loading() {
            let progress = spinner("Preparing your menu...");
            self.await_plan().await;
            progress.finish_and_clear();
        } else if session.plan.failure().is_some() {
            session.plan.try_again()?;
            self.spawn_plan()?;
        } else if index == 0 {
            self.start_plan()?;
        } else {
            session.plan.toggle(index - 1);
        }

        Ok(Flow::Continue)
    }

    fn start_plan(&mut self) -> Result<(), CoreError> {
        let session = self.shell.session_mut().ok_or(CoreError::ProfileRequired)?;
        session.plan.begin_generation()?;
        self.spawn_plan()
    }

    /// Runs the generation the plan view has just entered `Loading` for.
    fn spawn_plan(&mut self) -> Result<(), CoreError> {
        let profile = self
            .shell
            .profile()
            .cloned()
            .ok_or(CoreError::ProfileRequired)?;
        let service = Arc::clone(&self.service);

        self.pending_plan = Some(tokio::spawn(async move {
            service.generate_meal_plan(&profile).await
        }));
        Ok(())
    }
}
