//! LLM agents that back the creative assistant.

pub mod gemini_api_agent;

pub use gemini_api_agent::GeminiApiAgent;
