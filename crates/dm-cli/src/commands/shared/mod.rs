pub mod files;
pub mod llm;
