use anyhow::Result;

use crate::context::AppContext;

pub async fn ask(ctx: &AppContext, prompt: &str) -> Result<()> {
    ctx.require_session().await?;
    let profile = ctx.store.active_artist_profile().await;

    if let Some(reply) = ctx.assistant.ask(profile.as_ref(), prompt).await {
        println!("{reply}");
    }
    Ok(())
}
