//! Collaboration request domain model.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a collaboration request.
///
/// Requests start `Pending`. Transitions are not guarded: a request can be
/// moved between states any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollabStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl CollabStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollabRequest {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
    pub message: String,
    pub status: CollabStatus,
    pub created_at: String,
}

impl CollabRequest {
    /// Copy of this request with only the status replaced.
    pub fn with_status(&self, status: CollabStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Sender-supplied part of a request; id, status and timestamp are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct CollabRequestDraft {
    pub from_id: String,
    pub to_id: String,
    pub message: String,
}

impl CollabRequestDraft {
    pub fn into_request(self, id: String, created_at: String) -> CollabRequest {
        CollabRequest {
            id,
            from_id: self.from_id,
            to_id: self.to_id,
            message: self.message,
            status: CollabStatus::Pending,
            created_at,
        }
    }
}

/// Requests addressed to `user_id`.
pub fn requests_for<'a>(requests: &'a [CollabRequest], user_id: &str) -> Vec<&'a CollabRequest> {
    requests.iter().filter(|r| r.to_id == user_id).collect()
}

/// Requests sent by `user_id`.
pub fn requests_from<'a>(requests: &'a [CollabRequest], user_id: &str) -> Vec<&'a CollabRequest> {
    requests.iter().filter(|r| r.from_id == user_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CollabRequestDraft {
        CollabRequestDraft {
            from_id: "u1".to_string(),
            to_id: "a1".to_string(),
            message: "Shall we?".to_string(),
        }
    }

    #[test]
    fn test_new_request_is_pending() {
        let request = draft().into_request("cr_1".into(), "2024-01-01T00:00:00Z".into());
        assert_eq!(request.status, CollabStatus::Pending);
    }

    #[test]
    fn test_with_status_changes_only_status() {
        let request = draft().into_request("cr_1".into(), "2024-01-01T00:00:00Z".into());
        let accepted = request.with_status(CollabStatus::Accepted);
        assert_eq!(accepted.status, CollabStatus::Accepted);
        assert_eq!(
            CollabRequest {
                status: CollabStatus::Pending,
                ..accepted
            },
            request
        );
    }

    #[test]
    fn test_direction_filters() {
        let requests = vec![
            draft().into_request("cr_1".into(), "t".into()),
            CollabRequestDraft {
                from_id: "a1".into(),
                to_id: "u1".into(),
                message: "Back at you".into(),
            }
            .into_request("cr_2".into(), "t".into()),
        ];
        assert_eq!(requests_for(&requests, "a1")[0].id, "cr_1");
        assert_eq!(requests_from(&requests, "a1")[0].id, "cr_2");
    }
}
