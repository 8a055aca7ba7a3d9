// src/models.rs
use serde::{Serialize, Deserialize};

/// Result of running a password through the external scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// Categorical score from 0 (weakest) to 4 (strongest)
    pub score: u8,
    /// Offline crack time at 10^10 guesses per second
    pub crack_time_seconds: f64,
    /// Human-readable form of `crack_time_seconds`, e.g. "3 hours" or "centuries"
    pub crack_time_display: String,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

// Display lookup for a reconciled score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthLevel {
    pub score: u8,
    pub color: &'static str,
    pub label: &'static str,
    pub fill_percent: u8,
}

pub const STRENGTH_LEVELS: [StrengthLevel; 5] = [
    StrengthLevel { score: 0, color: "strength-0", label: "Very Weak", fill_percent: 20 },
    StrengthLevel { score: 1, color: "strength-1", label: "Weak", fill_percent: 40 },
    StrengthLevel { score: 2, color: "strength-2", label: "Moderate", fill_percent: 60 },
    StrengthLevel { score: 3, color: "strength-3", label: "Strong", fill_percent: 80 },
    StrengthLevel { score: 4, color: "strength-4", label: "Very Strong", fill_percent: 100 },
];

impl StrengthLevel {
    /// Scores above 4 are clamped to the top level.
    pub fn for_score(score: u8) -> &'static StrengthLevel {
        &STRENGTH_LEVELS[usize::from(score.min(4))]
    }
}

/// What the "suggest stronger password" action decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    Empty,
    AlreadyStrong,
    Enhanced { password: String, attempts: usize },
    TooCommon,
    Exhausted { attempts: usize },
    Ineligible,
}

const ALREADY_STRONG_TIPS: &[&str] = &[
    "Keep using this strong password",
    "Make sure to use different strong passwords for different accounts",
];

const TOO_COMMON_TIPS: &[&str] = &[
    "Avoid dictionary words, names and keyboard patterns",
    "Start from a longer phrase that only you would think of",
];

const EXHAUSTED_TIPS: &[&str] = &[
    "Try using a longer base password",
    "Use a combination of unrelated words",
    "Consider using a passphrase with special characters",
];

const INELIGIBLE_TIPS: &[&str] = &[
    "Add more words or characters before requesting a suggestion",
    "Use a combination of unrelated words",
];

impl SuggestionOutcome {
    /// Canned warning and suggestion list for outcomes that leave the password untouched.
    /// `Empty` and `Enhanced` have none: the first is a no-op and the second is re-evaluated.
    pub fn guidance(&self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            SuggestionOutcome::Empty | SuggestionOutcome::Enhanced { .. } => None,
            SuggestionOutcome::AlreadyStrong => Some((
                "Your password is already strong! No suggestions needed.",
                ALREADY_STRONG_TIPS,
            )),
            SuggestionOutcome::TooCommon => Some((
                "This password is too common to strengthen. Please choose a more unique base password.",
                TOO_COMMON_TIPS,
            )),
            SuggestionOutcome::Exhausted { .. } => Some((
                "Unable to create a suitable stronger version. Please try a different base password.",
                EXHAUSTED_TIPS,
            )),
            SuggestionOutcome::Ineligible => Some((
                "This password is too weak to enhance. Please try a different base password.",
                INELIGIBLE_TIPS,
            )),
        }
    }

    pub fn suggested_password(&self) -> Option<&str> {
        match self {
            SuggestionOutcome::Enhanced { password, .. } => Some(password.as_str()),
            _ => None,
        }
    }
}

/// Everything the display surfaces currently show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterView {
    pub score: u8,
    pub label: String,
    /// `None` after a reset, when the label falls back to the neutral text color
    pub color: Option<String>,
    pub fill_percent: u8,
    pub crack_time: String,
    pub warning: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_password: Option<String>,
}

impl Default for MeterView {
    fn default() -> Self {
        Self {
            score: 0,
            label: "Very Weak".to_string(),
            color: None,
            fill_percent: 0,
            crack_time: "-".to_string(),
            warning: "-".to_string(),
            suggestions: Vec::new(),
            suggested_password: None,
        }
    }
}
