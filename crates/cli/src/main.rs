//! `epseon` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve` — start the API server.
//! - `init`  — create the workspace tables.
//! - `list`  — print every workspace as JSON.
//! - `clear` — remove every workspace and its generation data.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::repository::workspaces as ws_repo;

#[derive(Parser)]
#[command(name = "epseon", about = "Workspace storage for the Epseon GUI", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Database {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://epseon.db")]
    database_url: String,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: String,
        #[command(flatten)]
        database: Database,
    },
    /// Create the workspace tables if they are missing.
    Init {
        #[command(flatten)]
        database: Database,
    },
    /// Print all workspaces as JSON.
    List {
        #[command(flatten)]
        database: Database,
    },
    /// Delete every workspace and all generation data.
    Clear {
        #[command(flatten)]
        database: Database,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database } => {
            let mut session = db::open_session(&database.database_url)
                .await
                .context("failed to open database")?;
            db::schema::create_tables(&mut session).await?;
            info!("Starting API server on {bind}");
            api::serve(&bind, session).await.context("API server stopped")?;
        }
        Command::Init { database } => {
            let mut session = db::open_session(&database.database_url)
                .await
                .context("failed to open database")?;
            db::schema::create_tables(&mut session).await?;
            info!("Tables ready in {}", database.database_url);
        }
        Command::List { database } => {
            let mut session = db::open_session(&database.database_url)
                .await
                .context("failed to open database")?;
            let workspaces = ws_repo::get_all_workspaces(&mut session).await?;
            println!("{}", serde_json::to_string_pretty(&workspaces)?);
        }
        Command::Clear { database } => {
            let mut session = db::open_session(&database.database_url)
                .await
                .context("failed to open database")?;
            ws_repo::remove_all_workspaces(&mut session).await?;
            info!("All workspaces removed");
        }
    }

    Ok(())
}
