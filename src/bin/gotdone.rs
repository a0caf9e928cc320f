//! Administrative entry point for a gotdone store.
//!
//! Usage:
//!
//! ```text
//! gotdone [--database-url <PATH>] init
//! gotdone [--database-url <PATH>] summary
//! ```
//!
//! Configuration comes from `GOTDONE_SECRET_KEY`, `GOTDONE_DATABASE_URL` and
//! `GOTDONE_POOL_SIZE`; `--database-url` overrides the environment.

use clap::{Parser, Subcommand};
use gotdone::app::App;
use gotdone::config::AppConfig;
use gotdone::error::AppError;
use gotdone::telemetry::init_tracing;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "gotdone", version, about = "Manage a gotdone to-do store")]
struct Cli {
    /// SQLite database path, overriding `GOTDONE_DATABASE_URL`.
    #[arg(long, value_name = "PATH")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database file and apply the schema.
    Init,
    /// Log category, to-do and archive counts.
    Summary,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing()?;

    if let Err(err) = run(cli).await {
        error!(error = %err, kind = ?err.kind(), "command failed");
        return Err(err);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let Cli {
        database_url,
        command,
    } = cli;
    let mut config = AppConfig::from_env()?;
    if let Some(url) = database_url {
        config = config.with_database_url(url);
    }

    let app = App::open(&config).await?;
    let outcome = match command {
        Command::Init => {
            info!(database_url = config.database_url(), "store initialised");
            Ok(())
        }
        Command::Summary => app.summary().await.map(|summary| {
            info!(
                categories = summary.categories,
                tasks = summary.tasks,
                overdue = summary.overdue,
                done = summary.done,
                "store summary"
            );
        }),
    };
    app.close();
    outcome
}
