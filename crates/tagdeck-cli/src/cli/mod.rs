//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tagdeck_core::{config, logging};
use tokio::runtime::Runtime;

mod commands;

#[derive(Parser)]
#[command(name = "tagdeck")]
#[command(version)]
#[command(about = "Entry panel tab and sign-in controller")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the tab set for a file or directory
    Tabs(commands::tabs::TabsArgs),

    /// Identity provider tools
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum AuthCommands {
    /// Replay recorded identity provider notifications and print host actions
    Replay {
        /// JSON fixture with groups, tenants and notifications
        fixture: PathBuf,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a commented default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::load().context("load config")?;
    let _log_guard = logging::init(&config.log, cli.verbose).context("init logging")?;

    let rt = Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli, config).await })
}

async fn dispatch(cli: Cli, config: config::Config) -> Result<()> {
    match cli.command {
        Commands::Tabs(args) => commands::tabs::run(&config, args).await,
        Commands::Auth { command } => match command {
            AuthCommands::Replay { fixture } => commands::auth::replay(&config, &fixture).await,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
