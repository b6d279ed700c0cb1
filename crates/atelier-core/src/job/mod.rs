//! Job board domain module.

mod model;

pub use model::{Job, JobCategory, JobDraft, jobs_in_category};
