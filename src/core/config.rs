// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::core::meter::DEFAULT_MAX_ATTEMPTS;
use crate::core::policy::PolicyMode;

// Configuration for the strength meter
#[derive(Debug, Clone)]
pub struct Config {
    // Scoring
    pub reconciliation_mode: PolicyMode,
    pub user_inputs: Vec<String>,

    // Suggestions
    pub max_enhance_attempts: usize,
    pub rng_seed: Option<u64>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Scoring
            reconciliation_mode: PolicyMode::Threshold,
            user_inputs: Vec::new(),

            // Suggestions
            max_enhance_attempts: DEFAULT_MAX_ATTEMPTS,
            rng_seed: None,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables. Rejected values are
    // returned as warnings, since the logger is not running yet.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Scoring
        if let Some(mode) = lookup("RECONCILIATION_MODE") {
            match mode.parse() {
                Ok(mode) => config.reconciliation_mode = mode,
                Err(e) => warnings.push(format!("{}, using {}", e, config.reconciliation_mode)),
            }
        }

        if let Some(inputs) = lookup("PASSMETER_USER_INPUTS") {
            config.user_inputs = inputs
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        // Suggestions
        if let Some(val) = lookup("MAX_ENHANCE_ATTEMPTS") {
            match val.parse::<usize>() {
                Ok(attempts) if attempts > 0 => config.max_enhance_attempts = attempts,
                _ => warnings.push(format!(
                    "Invalid MAX_ENHANCE_ATTEMPTS '{}', using {}",
                    val, config.max_enhance_attempts
                )),
            }
        }

        if let Some(val) = lookup("RNG_SEED") {
            match val.parse() {
                Ok(seed) => config.rng_seed = Some(seed),
                Err(_) => warnings.push(format!("Invalid RNG_SEED '{}', suggestions stay unseeded", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Invalid LOG_LEVEL '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }
}
