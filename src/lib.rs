//! rworklog library root.
//! Exposes the CLI parser, the high-level run() function, and the clock,
//! session and work log modules.

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod session;
pub mod ui;
pub mod utils;
pub mod worklog;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None => {
            let project = cli.project.as_deref().unwrap_or(&cfg.default_project);
            cli::commands::track::handle(project, cfg)
        }
        Some(Commands::Init { force }) => cli::commands::init::handle(*force),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics to file
    logging::init();

    // 3️⃣ load config once
    let mut cfg = Config::load();

    // 4️⃣ command-line overrides
    if let Some(dir) = &cli.log_dir {
        cfg.log_dir = dir.clone();
    }
    if let Some(ms) = cli.tick_ms {
        cfg.tick_millis = ms;
    }

    dispatch(&cli, &cfg)
}
