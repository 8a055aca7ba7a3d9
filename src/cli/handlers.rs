// src/cli/handlers.rs
use anyhow::Context;
use console::Term;
use inquire::{Password, PasswordDisplayMode};
use serde::Serialize;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::{PasswordMeter, PolicyMode};
use crate::display::{ConsoleSurface, DisplaySurface};
use crate::generators::{RandomSource, RngSource};
use crate::models::{MeterView, SuggestionOutcome};
use crate::scoring::ZxcvbnScorer;

#[derive(Serialize)]
struct Report<'a> {
    mode: PolicyMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a SuggestionOutcome>,
    meter: &'a MeterView,
}

// Command line flags win over environment configuration
pub fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(mode) = args.mode {
        config.reconciliation_mode = mode;
    }
    if let Some(attempts) = args.max_attempts {
        config.max_enhance_attempts = attempts.max(1);
    }
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }
}

pub fn build_meter<D: DisplaySurface>(config: &Config, surface: D) -> PasswordMeter<ZxcvbnScorer, D> {
    let rng: Box<dyn RandomSource> = match config.rng_seed {
        Some(seed) => {
            log::debug!("Using seeded random source");
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    };
    let scorer = ZxcvbnScorer::with_user_inputs(config.user_inputs.clone());

    PasswordMeter::new(scorer, surface, config.reconciliation_mode, rng)
        .with_max_attempts(config.max_enhance_attempts)
}

pub fn prompt_password(message: &str) -> anyhow::Result<String> {
    let password = Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .without_confirmation()
        .prompt()?;
    Ok(password)
}

fn resolve_password(password: Option<String>) -> anyhow::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => prompt_password("Password:"),
    }
}

pub fn report_json(mode: PolicyMode, outcome: Option<&SuggestionOutcome>, meter: &MeterView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { mode, outcome, meter })
}

fn output(meter: &PasswordMeter<ZxcvbnScorer, ConsoleSurface>, outcome: Option<&SuggestionOutcome>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", report_json(meter.policy().mode(), outcome, meter.surface().view())?);
    } else {
        meter.surface().render(&Term::stdout()).context("Failed to write meter")?;
    }
    Ok(())
}

pub fn handle_check(config: &Config, password: Option<String>, json: bool) -> anyhow::Result<()> {
    let password = resolve_password(password)?;
    let mut meter = build_meter(config, ConsoleSurface::new());
    meter.evaluate(&password)?;
    output(&meter, None, json)
}

pub fn handle_suggest(config: &Config, password: Option<String>, json: bool) -> anyhow::Result<()> {
    let password = resolve_password(password)?;
    let mut meter = build_meter(config, ConsoleSurface::new());
    let outcome = meter.suggest(&password)?;
    if outcome == SuggestionOutcome::Empty {
        log::info!("Nothing to strengthen: empty password");
    }
    output(&meter, Some(&outcome), json)
}
