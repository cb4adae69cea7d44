use std::fmt;

use crate::domain::{
    profile::entities::UserProfile,
    views::{ChatView, PlanView, ScanView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Plan,
    Scan,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Plan, Tab::Scan, Tab::Chat];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Plan => "Meals",
            Tab::Scan => "Scan",
            Tab::Chat => "Assistant",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    NoProfile,
    Plan,
    Scan,
    Chat,
}

impl From<Tab> for ShellState {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Plan => ShellState::Plan,
            Tab::Scan => ShellState::Scan,
            Tab::Chat => ShellState::Chat,
        }
    }
}

/// Everything tied to the active profile. Dropped as a whole on reset.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub profile: UserProfile,
    pub tab: Tab,
    pub plan: PlanView,
    pub scan: ScanView,
    pub chat: ChatView,
}

impl ActiveSession {
    pub fn new(profile: UserProfile) -> Self {
        let chat = ChatView::new(&profile.name);
        Self {
            profile,
            tab: Tab::Plan,
            plan: PlanView::new(),
            scan: ScanView::new(),
            chat,
        }
    }
}
