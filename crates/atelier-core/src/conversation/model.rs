//! Direct messaging domain models.

use serde::{Deserialize, Serialize};

/// A single message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_portfolio_id: Option<String>,
}

/// A thread between (nominally) two users.
///
/// `messages` is append-only: nothing reorders or removes entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, participants: Vec<String>) -> Self {
        Self {
            id: id.into(),
            participants,
            messages: Vec::new(),
        }
    }

    pub fn includes(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// Returns a copy with `message` appended; `self` is left untouched.
    pub fn with_message(&self, message: Message) -> Self {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend(self.messages.iter().cloned());
        messages.push(message);
        Self {
            id: self.id.clone(),
            participants: self.participants.clone(),
            messages,
        }
    }

    /// The participant that is not `user_id`.
    pub fn other_participant(&self, user_id: &str) -> Option<&str> {
        self.participants
            .iter()
            .find(|p| p.as_str() != user_id)
            .map(String::as_str)
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn unread_count_for(&self, user_id: &str) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.is_read && m.sender_id != user_id)
            .count()
    }
}

/// Finds the conversation whose participants include both users.
pub fn find_conversation_between<'a>(
    conversations: &'a [Conversation],
    user_id: &str,
    other_id: &str,
) -> Option<&'a Conversation> {
    conversations
        .iter()
        .find(|c| c.includes(user_id) && c.includes(other_id))
}

/// Conversations the user takes part in, in collection order.
pub fn conversations_for<'a>(conversations: &'a [Conversation], user_id: &str) -> Vec<&'a Conversation> {
    conversations.iter().filter(|c| c.includes(user_id)).collect()
}

/// The conversation holding the most recent message, if any has messages.
///
/// Timestamps are RFC 3339 in UTC, so lexical order is chronological.
pub fn most_recently_active(conversations: &[Conversation]) -> Option<&Conversation> {
    conversations
        .iter()
        .filter_map(|c| c.last_message().map(|m| (m.timestamp.as_str(), c)))
        .max_by(|a, b| a.0.cmp(b.0))
        .map(|(_, c)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, sender: &str, ts: &str) -> Message {
        Message {
            id: id.to_string(),
            sender_id: sender.to_string(),
            text: format!("hello from {sender}"),
            timestamp: ts.to_string(),
            is_read: false,
            shared_portfolio_id: None,
        }
    }

    #[test]
    fn test_with_message_appends_without_touching_existing() {
        let original = Conversation::new("c1", vec!["u1".into(), "a1".into()])
            .with_message(message("m1", "u1", "2024-05-01T10:00:00Z"));
        let updated = original.with_message(message("m2", "a1", "2024-05-01T10:01:00Z"));

        assert_eq!(original.messages.len(), 1);
        assert_eq!(updated.messages.len(), 2);
        assert_eq!(updated.messages[0], original.messages[0]);
        assert_eq!(updated.messages[1].id, "m2");
    }

    #[test]
    fn test_other_participant_and_lookup() {
        let convos = vec![
            Conversation::new("c1", vec!["u1".into(), "a1".into()]),
            Conversation::new("c2", vec!["u1".into(), "a2".into()]),
        ];
        let found = find_conversation_between(&convos, "a2", "u1").unwrap();
        assert_eq!(found.id, "c2");
        assert_eq!(found.other_participant("u1"), Some("a2"));
        assert!(find_conversation_between(&convos, "a1", "a2").is_none());
        assert_eq!(conversations_for(&convos, "u1").len(), 2);
    }

    #[test]
    fn test_most_recently_active_skips_empty_threads() {
        let convos = vec![
            Conversation::new("c0", vec![]),
            Conversation::new("c1", vec![]).with_message(message("m1", "x", "2024-05-01T10:00:00Z")),
            Conversation::new("c2", vec![]).with_message(message("m2", "x", "2024-06-01T10:00:00Z")),
        ];
        assert_eq!(most_recently_active(&convos).unwrap().id, "c2");
        assert!(most_recently_active(&convos[..1]).is_none());
    }

    #[test]
    fn test_shared_portfolio_id_is_omitted_when_absent() {
        let json = serde_json::to_value(message("m1", "u1", "t")).unwrap();
        assert!(json.get("sharedPortfolioId").is_none());
        assert_eq!(json["senderId"], "u1");
    }

    #[test]
    fn test_unread_count_ignores_own_messages() {
        let convo = Conversation::new("c1", vec!["u1".into(), "a1".into()])
            .with_message(message("m1", "u1", "t1"))
            .with_message(message("m2", "a1", "t2"));
        assert_eq!(convo.unread_count_for("u1"), 1);
    }
}
