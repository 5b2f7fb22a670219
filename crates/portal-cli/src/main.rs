use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use portal_core::account::{AccountId, SortOrder};
use portal_core::aggregate::ChartShape;
use portal_core::content::ItemId;
use portal_core::registration::RegistrationForm;

mod bootstrap;
mod commands;
mod render;
mod shell;

use bootstrap::{Overrides, Portal};

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Portal CLI - role-scoped posts, comments and dashboard", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for config, identity and logs
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Serve content from a local JSON fixture instead of the remote API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as the administrator or as a directory account
    Login { email: String, password: String },
    /// Erase the persisted identity
    Logout,
    /// Show the persisted identity
    Whoami,
    /// List posts visible to the current identity
    Posts {
        /// Case-insensitive filter over title and body
        #[arg(long)]
        search: Option<String>,
        /// Show the comments of one post
        #[arg(long)]
        expand: Option<ItemId>,
    },
    /// Show counts of users, posts and comments
    Dashboard {
        /// donut, bar or column (defaults to the configured shape)
        #[arg(long)]
        shape: Option<ChartShape>,
    },
    /// Browse the public user directory
    Users {
        #[arg(long)]
        search: Option<String>,
        /// asc or desc
        #[arg(long, default_value_t = SortOrder::Asc)]
        sort: SortOrder,
    },
    /// Show one user's profile
    User { id: AccountId },
    /// Validate a registration form
    Register {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        coordinates: String,
    },
    /// Describe the portal
    About,
    /// Start an interactive session
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let overrides = Overrides {
        config: cli.config,
        state_dir: cli.state_dir,
        fixture: cli.fixture,
    };
    let portal = Portal::bootstrap(&overrides)?;
    let ctx = &portal.ctx;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(ctx, &email, &password).await?,
        Commands::Logout => commands::auth::logout(ctx)?,
        Commands::Whoami => commands::auth::whoami(ctx)?,
        Commands::Posts { search, expand } => {
            commands::posts::run(ctx, search.as_deref(), expand).await?
        }
        Commands::Dashboard { shape } => {
            let shape = shape.unwrap_or(portal.config.dashboard.default_shape);
            commands::dashboard::run(ctx, shape).await?
        }
        Commands::Users { search, sort } => {
            commands::users::list(ctx, search.as_deref(), sort).await?
        }
        Commands::User { id } => commands::users::show(ctx, id).await?,
        Commands::Register {
            first_name,
            last_name,
            email,
            phone,
            coordinates,
        } => commands::register::run(
            ctx,
            RegistrationForm {
                first_name,
                last_name,
                email,
                phone,
                coordinates,
            },
        )?,
        Commands::About => commands::about(ctx),
        Commands::Shell => shell::run(&portal).await?,
    }

    Ok(())
}
