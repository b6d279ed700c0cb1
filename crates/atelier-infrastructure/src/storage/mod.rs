//! Local durable storage tier.

pub mod atomic_file;
mod json_file_store;
mod memory_store;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
