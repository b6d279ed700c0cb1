//! Collaboration request domain module.

mod model;

pub use model::{CollabRequest, CollabRequestDraft, CollabStatus, requests_for, requests_from};
