// src/cli/menu.rs
use console::Term;
use inquire::error::InquireError;
use inquire::{Password, PasswordDisplayMode, Select};

use crate::cli::handlers::build_meter;
use crate::core::config::Config;
use crate::display::ConsoleSurface;
use crate::utils::mask_password;

const ENTER: &str = "Enter a password";
const SHOW: &str = "Show password";
const HIDE: &str = "Hide password";
const SUGGEST: &str = "Suggest a stronger password";
const CLEAR: &str = "Clear";
const EXIT: &str = "Exit";

// Text shown for the current password, masked unless visibility is toggled on
pub fn password_line(password: &str, visible: bool) -> String {
    let shown = if password.is_empty() {
        "-".to_string()
    } else if visible {
        password.to_string()
    } else {
        mask_password(password)
    };
    format!("Password:   {}", shown)
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

pub fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let term = Term::stdout();
    let mut meter = build_meter(config, ConsoleSurface::new());
    let mut password = String::new();
    let mut visible = false;

    term.write_line(&format!("🔐 Password strength meter ({} mode)", meter.policy().mode()))?;

    loop {
        let toggle = if visible { HIDE } else { SHOW };
        let choice = match Select::new("What would you like to do?", vec![ENTER, toggle, SUGGEST, CLEAR, EXIT]).prompt() {
            Ok(choice) => choice,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            ENTER => {
                let display_mode = if visible { PasswordDisplayMode::Full } else { PasswordDisplayMode::Masked };
                let prompt = Password::new("Password:")
                    .with_display_mode(display_mode)
                    .with_display_toggle_enabled()
                    .without_confirmation()
                    .prompt();
                match prompt {
                    Ok(entered) => password = entered,
                    Err(e) if is_cancel(&e) => continue,
                    Err(e) => return Err(e.into()),
                }
                meter.evaluate(&password)?;
            }
            SHOW | HIDE => visible = !visible,
            SUGGEST => {
                if password.is_empty() {
                    term.write_line("Enter a password first.")?;
                    continue;
                }
                let outcome = meter.suggest(&password)?;
                if let Some(suggested) = outcome.suggested_password() {
                    password = suggested.to_string();
                }
            }
            CLEAR => {
                password.clear();
                meter.evaluate(&password)?;
            }
            _ => break,
        }

        term.write_line("")?;
        term.write_line(&password_line(&password, visible))?;
        meter.surface().render(&term)?;
        term.write_line("")?;
    }

    log::debug!("Interactive session finished");
    Ok(())
}
