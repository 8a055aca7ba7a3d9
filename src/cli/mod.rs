// src/cli/mod.rs
use clap::Parser;

use crate::core::PolicyMode;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password strength meter with stronger-password suggestions", long_about = None)]
pub struct Args {
    /// Print results as JSON instead of a colored meter
    #[arg(long)]
    pub json: bool,

    /// Score reconciliation and suggestion policy
    #[arg(long, value_enum)]
    pub mode: Option<PolicyMode>,

    /// Enhancement attempts before giving up (text-match mode)
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Seed for reproducible suggestions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
