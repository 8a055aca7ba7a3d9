// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Show strength, crack time, warnings and suggestions for a password
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },

    /// Suggest a stronger variant of a password
    Suggest {
        /// Base password (prompted for when omitted)
        password: Option<String>,
    },

    /// Interactive meter: type, show/hide and strengthen a password
    Interactive,
}
