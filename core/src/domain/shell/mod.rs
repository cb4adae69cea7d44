pub mod app_shell;
pub mod entities;

pub use app_shell::AppShell;
pub use entities::*;
