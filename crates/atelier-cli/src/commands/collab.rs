use anyhow::{Result, bail};
use atelier_core::collab::{CollabRequest, CollabRequestDraft, CollabStatus, requests_for, requests_from};

use crate::context::AppContext;

pub async fn send(ctx: &AppContext, to_id: &str, message: &str) -> Result<()> {
    let session = ctx.require_session().await?;

    let request = ctx
        .store
        .send_collab_request(CollabRequestDraft {
            from_id: session.id,
            to_id: to_id.to_string(),
            message: message.to_string(),
        })
        .await;

    println!("Sent collab request {} to {}", request.id, request.to_id);
    Ok(())
}

pub async fn accept(ctx: &AppContext, request_id: &str) -> Result<()> {
    set_status(ctx, request_id, CollabStatus::Accepted).await
}

pub async fn decline(ctx: &AppContext, request_id: &str) -> Result<()> {
    set_status(ctx, request_id, CollabStatus::Declined).await
}

async fn set_status(ctx: &AppContext, request_id: &str, status: CollabStatus) -> Result<()> {
    ctx.require_session().await?;

    if !ctx.store.update_collab_status(request_id, status).await {
        bail!("No collab request with id {request_id}");
    }
    println!("{} is now {}", request_id, status.as_str());
    Ok(())
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    let session = ctx.require_session().await?;
    let requests = ctx.store.collab_requests().await;

    print_section("Incoming", &requests_for(&requests, &session.id), |r| r.from_id.as_str());
    print_section("Outgoing", &requests_from(&requests, &session.id), |r| r.to_id.as_str());
    Ok(())
}

fn print_section(title: &str, requests: &[&CollabRequest], counterpart: impl Fn(&CollabRequest) -> &str) {
    println!("{title}");
    if requests.is_empty() {
        println!("  (none)");
    }
    for request in requests {
        println!(
            "  {}  {:<9} {}  \"{}\"",
            request.id,
            request.status.as_str(),
            counterpart(*request),
            request.message
        );
    }
}
