use anyhow::Result;
use atelier_core::job::{JobCategory, JobDraft, jobs_in_category};
use clap::Args;

use crate::context::AppContext;

#[derive(Args)]
pub struct PostJobArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub category: JobCategory,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub budget: String,
    /// Comma separated
    #[arg(long, default_value = "")]
    pub skills: String,
    #[arg(long)]
    pub deadline: String,
}

pub async fn list(ctx: &AppContext, category: Option<JobCategory>) -> Result<()> {
    let jobs = ctx.store.jobs().await;
    let visible = jobs_in_category(&jobs, category);

    if visible.is_empty() {
        println!("No open jobs.");
        return Ok(());
    }

    for job in visible {
        println!("{}  {} @ {}", job.id, job.title, job.company);
        println!(
            "    {} · {} · due {}",
            job.category.as_str(),
            job.budget,
            job.deadline
        );
        if !job.skills.is_empty() {
            println!("    {}", job.skills.join(", "));
        }
    }
    Ok(())
}

pub async fn post(ctx: &AppContext, args: PostJobArgs) -> Result<()> {
    let session = ctx.require_session().await?;

    let draft = JobDraft {
        title: args.title,
        company: args.company,
        category: args.category,
        description: args.description,
        budget: args.budget,
        skills: JobDraft::parse_skills(&args.skills),
        deadline: args.deadline,
        posted_by: session.id,
    };
    let job = ctx.store.post_job(draft).await?;

    println!("Posted {} ({})", job.id, job.title);
    Ok(())
}
