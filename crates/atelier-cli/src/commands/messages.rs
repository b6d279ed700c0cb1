use anyhow::Result;
use atelier_core::conversation::conversations_for;

use crate::context::AppContext;

pub async fn send(
    ctx: &AppContext,
    conversation_id: &str,
    text: &str,
    share: Option<String>,
) -> Result<()> {
    ctx.require_session().await?;

    match ctx.store.send_message(conversation_id, text, share).await? {
        Some(message) => println!("Sent {} at {}", message.id, message.timestamp),
        None => println!("No conversation {conversation_id}; nothing sent."),
    }
    Ok(())
}

pub async fn open(ctx: &AppContext, other_user_id: &str) -> Result<()> {
    ctx.require_session().await?;

    if let Some(conversation) = ctx.store.open_conversation(other_user_id).await? {
        println!("{}", conversation.id);
    }
    Ok(())
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    let session = ctx.require_session().await?;
    let conversations = ctx.store.conversations().await;
    let artists = ctx.store.artists().await;

    let mine = conversations_for(&conversations, &session.id);
    if mine.is_empty() {
        println!("No conversations yet.");
        return Ok(());
    }

    for conversation in mine {
        let other = conversation.other_participant(&session.id).unwrap_or("-");
        let other_name = artists
            .iter()
            .find(|a| a.id == other)
            .map(|a| a.name.as_str())
            .unwrap_or(other);
        let unread = conversation.unread_count_for(&session.id);
        let preview = conversation
            .last_message()
            .map(|m| m.text.as_str())
            .unwrap_or("(no messages)");

        println!("{}  {} [{} unread]", conversation.id, other_name, unread);
        println!("    {}", preview);
    }
    Ok(())
}
