pub mod llm;
pub mod profile;
