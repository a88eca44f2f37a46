//! qrattend library root.
//! Exposes the CLI parser, the high-level `run()` function and the modules
//! behind it (backend client, local store, business logic).

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg).await,
        Commands::Logout { .. } => cli::commands::logout::handle(&cli.command, cfg).await,
        Commands::Session => cli::commands::session::handle(cfg),
        Commands::Projects { .. } => cli::commands::projects::handle(&cli.command, cfg).await,
        Commands::Scan { .. } => cli::commands::scan::handle(&cli.command),
        Commands::Mark { .. } => cli::commands::mark::handle(&cli.command, cfg).await,
        Commands::Attendance { .. } => cli::commands::attendance::handle(&cli.command, cfg).await,
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr so that tables on stdout stay clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("qrattend=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(url) = &cli.url {
        cfg.base_url = url.clone();
    }

    dispatch(&cli, &cfg).await
}
