//! Conversation domain module.

mod model;

pub use model::{
    Conversation, Message, conversations_for, find_conversation_between, most_recently_active,
};
