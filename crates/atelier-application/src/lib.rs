//! Application layer for Atelier.
//!
//! The store owns in-memory state and drives persistence through the facade;
//! the assistant service wraps the LLM collaborator.

pub mod assistant_service;
pub mod store;

pub use assistant_service::{AssistantRole, AssistantTurn, CreativeAssistantService};
pub use store::{AppStore, PersistQueue, StoreState};
