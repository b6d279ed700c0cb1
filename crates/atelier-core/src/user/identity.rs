//! Stable user id derivation.
//!
//! Ids are UUID v5 values over the normalized email, so logging in twice
//! with the same address always lands on the same user and profile.

use uuid::Uuid;

/// Namespace for Atelier user ids.
const USER_NAMESPACE: Uuid = Uuid::from_u128(0x6a1f_3c2e_9b7d_4e58_a0c4_5d21_7f3e_8b90);

/// Trims and lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Derives the user id for an email address: `u_` followed by the simple
/// form of a UUID v5.
pub fn derive_user_id(email: &str) -> String {
    let normalized = normalize_email(email);
    let uuid = Uuid::new_v5(&USER_NAMESPACE, normalized.as_bytes());
    format!("u_{}", uuid.simple())
}

/// Display name used at sign-up: the local part of the address.
pub fn display_name_from_email(email: &str) -> String {
    let trimmed = email.trim();
    trimmed
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}
