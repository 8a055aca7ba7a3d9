// src/core/policy.rs
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::models::StrengthAssessment;

// Crack time thresholds in seconds
pub const ONE_MINUTE_SECONDS: f64 = 60.0;
pub const ONE_HOUR_SECONDS: f64 = 3_600.0;
pub const ONE_DAY_SECONDS: f64 = 86_400.0;
pub const ONE_MONTH_SECONDS: f64 = 2_592_000.0;
pub const TEN_YEARS_SECONDS: f64 = 315_360_000.0;

const FAST_CRACK_KEYWORDS: [&str; 4] = ["instant", "second", "minute", "hour"];
const SLOW_CRACK_KEYWORDS: [&str; 2] = ["decades", "centuries"];

/// How scores are reconciled and how the suggestion action behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyMode {
    /// Numeric crack-time ceiling; weak passwords are always enhanced once
    #[default]
    Threshold,
    /// Raw score plus crack-time text matching; bounded retries that may refuse
    TextMatch,
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyMode::Threshold => write!(f, "threshold"),
            PolicyMode::TextMatch => write!(f, "text-match"),
        }
    }
}

impl FromStr for PolicyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "threshold" => Ok(PolicyMode::Threshold),
            "text-match" | "text_match" | "textmatch" => Ok(PolicyMode::TextMatch),
            other => Err(format!("unknown reconciliation mode '{}'", other)),
        }
    }
}

/// Highest score a password may earn given only how long it takes to crack.
pub fn time_ceiling(crack_time_seconds: f64) -> u8 {
    if crack_time_seconds >= TEN_YEARS_SECONDS {
        4
    } else if crack_time_seconds >= ONE_MONTH_SECONDS {
        3
    } else if crack_time_seconds >= ONE_HOUR_SECONDS {
        2
    } else if crack_time_seconds >= ONE_MINUTE_SECONDS {
        1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScorePolicy {
    mode: PolicyMode,
}

impl ScorePolicy {
    pub fn new(mode: PolicyMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PolicyMode {
        self.mode
    }

    /// Final score in `0..=4`.
    ///
    /// In threshold mode a password is never rated above its weakest side:
    /// lexical complexity (the scorer's rating) or crack time.
    pub fn reconcile(&self, assessment: &StrengthAssessment) -> u8 {
        let score = assessment.score.min(4);
        match self.mode {
            PolicyMode::Threshold => score.min(time_ceiling(assessment.crack_time_seconds)),
            PolicyMode::TextMatch => score,
        }
    }

    pub fn is_too_common(&self, assessment: &StrengthAssessment) -> bool {
        if assessment.score < 2 {
            return true;
        }
        match self.mode {
            PolicyMode::Threshold => assessment.crack_time_seconds < ONE_DAY_SECONDS,
            PolicyMode::TextMatch => display_reads_fast(&assessment.crack_time_display),
        }
    }

    /// At least a decade to crack offline.
    pub fn has_sufficient_crack_time(&self, assessment: &StrengthAssessment) -> bool {
        match self.mode {
            PolicyMode::Threshold => assessment.crack_time_seconds >= TEN_YEARS_SECONDS,
            PolicyMode::TextMatch => display_reads_slow(&assessment.crack_time_display),
        }
    }
}

// Matches the English wording of the scorer's display text ("3 hours", "less than a second").
fn display_reads_fast(display: &str) -> bool {
    let display = display.to_lowercase();
    FAST_CRACK_KEYWORDS.iter().any(|keyword| display.contains(keyword))
}

// "centuries", "decades", or "<N> years" with N >= 10
fn display_reads_slow(display: &str) -> bool {
    let display = display.to_lowercase();
    if SLOW_CRACK_KEYWORDS.iter().any(|keyword| display.contains(keyword)) {
        return true;
    }
    let words: Vec<&str> = display.split_whitespace().collect();
    words.windows(2).any(|pair| {
        pair[1].starts_with("year") && pair[0].parse::<u64>().map_or(false, |n| n >= 10)
    })
}
