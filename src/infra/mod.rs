pub mod config;
pub mod openai;
