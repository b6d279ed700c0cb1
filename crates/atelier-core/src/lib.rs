//! Domain layer of Atelier.
//!
//! Entity models, read-side queries, the persistence boundary traits and the
//! shared error type. No I/O happens in this crate.

pub mod artist;
pub mod assistant;
pub mod collab;
pub mod config;
pub mod conversation;
pub mod error;
pub mod ids;
pub mod job;
pub mod persistence;
pub mod secret;
pub mod seed;
pub mod user;

// Re-export common error type
pub use error::{AtelierError, Result};
