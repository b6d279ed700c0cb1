pub mod artists;
pub mod assist;
pub mod collab;
pub mod jobs;
pub mod messages;
pub mod session;
