use std::{sync::Arc, time::Duration};

use colored::Colorize;
use dialoguer::{Confirm, Select};
use indicatif::{ProgressBar, ProgressStyle};
use nutrihelp_core::{
    application::NutrihelpService,
    domain::{
        common::entities::app_errors::CoreError,
        meal_plan::entities::MealPlan,
        scan::entities::ScanResult,
        shell::{AppShell, ShellState, Tab},
    },
};
use tokio::task::JoinHandle;
use tracing::warn;

pub mod assistant;
pub mod meals;
pub mod render;
pub mod scan;
pub mod setup;

type PendingRequest<T> = Option<JoinHandle<Result<T, CoreError>>>;

pub enum Flow {
    Continue,
    Quit,
}

/// Choice from the menu shown under every tab.
enum MenuChoice {
    Action(usize),
    Switch(Tab),
    Reset,
    Quit,
}

/// Interactive front-end driving an [`AppShell`].
pub struct Terminal {
    service: Arc<NutrihelpService>,
    shell: AppShell,
    pending_plan: PendingRequest<MealPlan>,
    pending_scan: PendingRequest<ScanResult>,
}

impl Terminal {
    pub async fn start(service: NutrihelpService) -> Self {
        let shell = AppShell::start(&service).await;
        Self {
            service: Arc::new(service),
            shell,
            pending_plan: None,
            pending_scan: None,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.collect_finished().await;

            let flow = match self.shell.state() {
                ShellState::NoProfile => self.setup().await?,
                ShellState::Plan => self.meals_tab().await?,
                ShellState::Scan => self.scan_tab().await?,
                ShellState::Chat => self.assistant_tab().await?,
            };

            if let Flow::Quit = flow {
                println!("{}", "Goodbye! Eat well.".green());
                return Ok(());
            }
        }
    }

    /// Hands background results that have already arrived to their views.
    async fn collect_finished(&mut self) {
        if self.pending_plan.as_ref().is_some_and(JoinHandle::is_finished) {
            self.await_plan().await;
        }
        if self.pending_scan.as_ref().is_some_and(JoinHandle::is_finished) {
            self.await_scan().await;
        }
    }

    async fn await_plan(&mut self) {
        let Some(handle) = self.pending_plan.take() else {
            return;
        };
        let outcome = join(handle).await;
        if let Some(session) = self.shell.session_mut() {
            session.plan.finish(outcome);
        }
    }

    async fn await_scan(&mut self) {
        let Some(handle) = self.pending_scan.take() else {
            return;
        };
        let outcome = join(handle).await;
        if let Some(session) = self.shell.session_mut() {
            session.scan.finish(outcome);
        }
    }

    fn print_tab_header(&self, tab: Tab) {
        let tabs: Vec<String> = Tab::ALL
            .iter()
            .map(|t| {
                if *t == tab {
                    format!("[{}]", t.label()).bold().green().to_string()
                } else {
                    t.label().dimmed().to_string()
                }
            })
            .collect();
        let name = self
            .shell
            .profile()
            .map(|profile| profile.name.as_str())
            .unwrap_or_default();

        println!();
        println!("{}  {}   {}", "NutriHelp".bold().green(), tabs.join("  "), name.dimmed());
        println!("{}", "─".repeat(60).dimmed());
    }

    /// Tab-specific actions followed by navigation entries.
    fn menu(&self, current: Tab, actions: &[String]) -> anyhow::Result<MenuChoice> {
        let others: Vec<Tab> = Tab::ALL.into_iter().filter(|tab| *tab != current).collect();

        let mut items: Vec<String> = actions.to_vec();
        items.extend(others.iter().map(|tab| format!("Go to {}", tab.label())));
        items.push("Reset Profile".to_string());
        items.push("Quit".to_string());

        let index = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        let choice = if index < actions.len() {
            MenuChoice::Action(index)
        } else if index < actions.len() + others.len() {
            MenuChoice::Switch(others[index - actions.len()])
        } else if index == items.len() - 2 {
            MenuChoice::Reset
        } else {
            MenuChoice::Quit
        };
        Ok(choice)
    }

    /// Applies a navigation choice. Tab actions are left to the caller.
    async fn navigate(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        match choice {
            MenuChoice::Action(_) => {}
            MenuChoice::Switch(tab) => self.shell.select_tab(tab)?,
            MenuChoice::Reset => self.reset().await?,
            MenuChoice::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn reset(&mut self) -> anyhow::Result<()> {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to reset your profile? This will clear your data.")
            .default(false)
            .interact()?;

        match self.shell.reset(self.service.as_ref(), || confirmed).await {
            Ok(true) => {
                if let Some(handle) = self.pending_plan.take() {
                    handle.abort();
                }
                if let Some(handle) = self.pending_scan.take() {
                    handle.abort();
                }
                println!("{}", "Your profile has been cleared.".yellow());
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Profile reset failed: {}", e);
                println!("{}", format!("Could not reset your profile: {}", e).red());
            }
        }
        Ok(())
    }
}

async fn join<T>(handle: JoinHandle<Result<T, CoreError>>) -> Result<T, CoreError> {
    handle.await.unwrap_or_else(|e| {
        warn!("Background request did not complete: {}", e);
        Err(CoreError::ExternalServiceError(format!(
            "request task failed: {}",
            e
        )))
    })
}

fn spinner(message: &str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message(message.to_string());
    progress
}
