pub mod chat;
pub mod common;
pub mod llm;
pub mod meal_plan;
pub mod profile;
pub mod scan;
pub mod shell;
pub mod views;
