use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod display;
mod generators;
mod logging;
mod models;
mod scoring;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    cli::handlers::apply_overrides(&mut config, &args);

    logging::init(&config)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args.command.as_ref().map(command_name));
    log::debug!("Reconciliation mode: {}", config.reconciliation_mode);

    match args.command {
        Some(CliCommand::Check { password }) => cli::handlers::handle_check(&config, password, args.json),
        Some(CliCommand::Suggest { password }) => cli::handlers::handle_suggest(&config, password, args.json),
        Some(CliCommand::Interactive) | None => cli::menu::run_interactive(&config),
    }
}

// Never log the arguments themselves: they may carry a password
fn command_name(command: &CliCommand) -> &'static str {
    match command {
        CliCommand::Check { .. } => "check",
        CliCommand::Suggest { .. } => "suggest",
        CliCommand::Interactive => "interactive",
    }
}
