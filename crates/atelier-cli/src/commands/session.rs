use anyhow::Result;
use atelier_core::user::UserType;

use crate::context::AppContext;

pub async fn login(ctx: &AppContext, email: &str, user_type: UserType) -> Result<()> {
    let session = ctx.store.login(email, user_type).await?;
    println!("Signed in as {} <{}>", session.name, session.email);
    println!("  id:   {}", session.id);
    if let Some(profile_id) = &session.profile_id {
        println!("  profile: {}", profile_id);
    }
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.store.logout().await?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    match ctx.store.session().await {
        Some(session) => {
            let kind = if session.is_artist() { "artist" } else { "client" };
            println!("{} <{}> ({kind})", session.name, session.email);
            println!("  id: {}", session.id);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
