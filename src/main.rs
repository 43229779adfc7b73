//! # Mentor Roster CLI (`mentors`)
//!
//! Browse a roster of mentor profiles from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! mentors --config ./config/mentors.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mentors search [QUERY]` | List mentors matching a keyword |
//! | `mentors show <ID>` | Print a full profile |
//! | `mentors favorites` | List bookmarked mentors |
//! | `mentors fav <ID>` | Toggle a bookmark |
//! | `mentors tags` | Print the popular topics |
//! | `mentors sources` | Show the configured roster source |
//! | `mentors export` | Dump the normalized roster as JSON |
//! | `mentors browse` | Interactive session |
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mentor_roster::{browse, commands, config, export, sources};

/// Mentor Roster — search mentor profiles, bookmark favorites, read
/// contact details.
#[derive(Parser)]
#[command(
    name = "mentors",
    about = "Mentor Roster — search mentor profiles and keep favorites",
    version,
    long_about = "Loads a roster of mentor profiles from the embedded list, a local CSV file, \
    or a CSV URL, and lets you search it by keyword, read full profiles, and bookmark \
    favorites that persist between runs."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/mentors.toml`. When the file does not exist the
    /// embedded roster and `./data/favorites.json` are used.
    #[arg(long, global = true, default_value = "./config/mentors.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the roster.
    ///
    /// Matches the keyword case-insensitively against name, organization,
    /// title and topic fields. Without a keyword every mentor is listed.
    Search {
        /// Keyword to search for.
        query: Option<String>,
    },

    /// Show a mentor's full profile.
    Show {
        /// Mentor id as shown in search results.
        id: u32,
    },

    /// List bookmarked mentors.
    Favorites,

    /// Add or remove a bookmark.
    Fav {
        /// Mentor id as shown in search results.
        id: u32,
    },

    /// Print the popular topics.
    Tags,

    /// Show the configured roster source and whether it is reachable.
    Sources,

    /// Export the normalized roster as JSON.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Start an interactive session on stdin/stdout.
    Browse,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Commands::Tags = cli.command {
        commands::run_tags();
        return Ok(());
    }

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Search { query } => {
            commands::run_search(&cfg, query.as_deref().unwrap_or("")).await?;
        }
        Commands::Show { id } => {
            commands::run_show(&cfg, id).await?;
        }
        Commands::Favorites => {
            commands::run_favorites(&cfg).await?;
        }
        Commands::Fav { id } => {
            commands::run_toggle(&cfg, id).await?;
        }
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Export { output } => {
            export::run_export(&cfg, output.as_deref()).await?;
        }
        Commands::Browse => {
            browse::run_browse(&cfg).await?;
        }
        Commands::Tags => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
