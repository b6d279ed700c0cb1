//! Entity id and timestamp generation.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

pub const JOB_ID_PREFIX: &str = "j";
pub const MESSAGE_ID_PREFIX: &str = "m";
pub const COLLAB_REQUEST_ID_PREFIX: &str = "cr";
pub const CONVERSATION_ID_PREFIX: &str = "c";

/// A fresh id such as `j_3f2a…`.
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Current UTC time as RFC 3339 with millisecond precision (`2024-05-01T10:00:00.000Z`).
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
