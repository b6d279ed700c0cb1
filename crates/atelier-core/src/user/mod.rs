//! User session domain module.
//!
//! - `model`: UserSession and UserType
//! - `identity`: stable user id derivation from an email address

mod identity;
mod model;

pub use identity::{derive_user_id, display_name_from_email, normalize_email};
pub use model::{UserSession, UserType};
