use anyhow::Result;
use atelier_core::artist::AvailabilityStatus;
use atelier_core::job::JobCategory;
use atelier_core::user::UserType;
use atelier_infrastructure::AtelierPaths;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod context;
mod logging;

use context::AppContext;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Atelier - network for creative professionals", long_about = None)]
struct Cli {
    /// Keep config, logs and data under this directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with an email address
    Login {
        email: String,
        /// artist or client
        #[arg(long = "type", default_value = "artist")]
        user_type: UserType,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Browse artists
    Artists {
        /// Matches name, headline or medium
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long)]
        medium: Option<String>,
        /// Available, Busy or Booked
        #[arg(short, long)]
        availability: Option<AvailabilityStatus>,
        /// Only featured artists
        #[arg(long)]
        featured: bool,
    },
    /// Show one artist profile
    Artist { id: String },
    /// Browse the job board
    Jobs {
        /// commission, freelance, full-time or collaboration
        #[arg(short, long)]
        category: Option<JobCategory>,
    },
    /// Post a job as the signed-in user
    PostJob(commands::jobs::PostJobArgs),
    /// Send a message in a conversation
    Message {
        conversation: String,
        text: String,
        /// Attach a portfolio piece by id
        #[arg(long)]
        share: Option<String>,
    },
    /// Find or start a conversation with another user
    OpenConversation { user: String },
    /// List your conversations
    Conversations,
    /// Collaboration requests
    Collab {
        #[command(subcommand)]
        action: CollabAction,
    },
    /// Ask the creative career assistant
    Ask {
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CollabAction {
    /// Propose a collaboration
    Send { to: String, message: String },
    /// Accept a request
    Accept { id: String },
    /// Decline a request
    Decline { id: String },
    /// Show incoming and outgoing requests
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logs_dir = if cli.ephemeral {
        None
    } else {
        AtelierPaths::new(cli.data_dir.as_deref()).logs_dir().ok()
    };
    let _log_guard = logging::init(logs_dir.as_deref(), cli.verbose);

    let ctx = AppContext::bootstrap(cli.data_dir.as_deref(), cli.ephemeral).await?;
    let outcome = run(&ctx, cli.command).await;

    // Queued saves must land even when the command failed
    ctx.shutdown().await?;
    outcome
}

async fn run(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, user_type } => commands::session::login(ctx, &email, user_type).await,
        Commands::Logout => commands::session::logout(ctx).await,
        Commands::Whoami => commands::session::whoami(ctx).await,
        Commands::Artists {
            query,
            medium,
            availability,
            featured,
        } => commands::artists::list(ctx, query, medium, availability, featured).await,
        Commands::Artist { id } => commands::artists::show(ctx, &id).await,
        Commands::Jobs { category } => commands::jobs::list(ctx, category).await,
        Commands::PostJob(args) => commands::jobs::post(ctx, args).await,
        Commands::Message {
            conversation,
            text,
            share,
        } => commands::messages::send(ctx, &conversation, &text, share).await,
        Commands::OpenConversation { user } => commands::messages::open(ctx, &user).await,
        Commands::Conversations => commands::messages::list(ctx).await,
        Commands::Collab { action } => match action {
            CollabAction::Send { to, message } => commands::collab::send(ctx, &to, &message).await,
            CollabAction::Accept { id } => commands::collab::accept(ctx, &id).await,
            CollabAction::Decline { id } => commands::collab::decline(ctx, &id).await,
            CollabAction::List => commands::collab::list(ctx).await,
        },
        Commands::Ask { prompt } => commands::assist::ask(ctx, &prompt.join(" ")).await,
    }
}
