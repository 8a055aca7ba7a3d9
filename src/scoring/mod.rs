// src/scoring/mod.rs
use thiserror::Error;
use zxcvbn::time_estimates::CrackTimeSeconds;

use crate::models::StrengthAssessment;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Cannot score an empty password")]
    EmptyPassword,

    #[error("Strength estimation failed: {0}")]
    Estimator(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

/// Black-box password strength estimator.
pub trait StrengthScorer {
    fn assess(&self, password: &str) -> Result<StrengthAssessment>;
}

/// Scores passwords with zxcvbn, reporting the offline fast-hashing attack scenario.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnScorer {
    user_inputs: Vec<String>,
}

impl ZxcvbnScorer {
    /// Extra words (user name, site name...) that zxcvbn penalizes when they appear in a password.
    pub fn with_user_inputs(user_inputs: Vec<String>) -> Self {
        Self { user_inputs }
    }
}

impl StrengthScorer for ZxcvbnScorer {
    fn assess(&self, password: &str) -> Result<StrengthAssessment> {
        if password.is_empty() {
            return Err(ScoringError::EmptyPassword);
        }

        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(password, &inputs)
            .map_err(|e| ScoringError::Estimator(format!("{:?}", e)))?;

        let crack_time = entropy.crack_times().offline_fast_hashing_1e10_per_second();
        let crack_time_seconds = match crack_time {
            CrackTimeSeconds::Integer(secs) => secs as f64,
            CrackTimeSeconds::Float(secs) => secs,
        };

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback.suggestions().iter().map(|s| s.to_string()).collect(),
            ),
            None => (None, Vec::new()),
        };

        Ok(StrengthAssessment {
            score: entropy.score(),
            crack_time_seconds,
            crack_time_display: crack_time.to_string(),
            warning,
            suggestions,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::{PolicyMode, ScorePolicy, TEN_YEARS_SECONDS};

    #[test]
    fn test_common_password_scores_low() {
        let scorer = ZxcvbnScorer::default();
        let result = scorer.assess("password").unwrap();
        assert_eq!(result.score, 0);
        assert!(result.crack_time_seconds < 60.0);
        assert!(result.warning.is_some());
    }

    #[test]
    fn test_random_passphrase_scores_high() {
        let scorer = ZxcvbnScorer::default();
        let result = scorer.assess("Tq7#vLp2!xZr9@Wm4$Kd").unwrap();
        assert_eq!(result.score, 4);
        assert!(result.crack_time_seconds >= TEN_YEARS_SECONDS);
        // zxcvbn words this as "<N> years" or "centuries"; both must read as slow
        assert!(ScorePolicy::new(PolicyMode::TextMatch).has_sufficient_crack_time(&result));
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let scorer = ZxcvbnScorer::default();
        assert!(matches!(scorer.assess(""), Err(ScoringError::EmptyPassword)));
    }

    #[test]
    fn test_user_inputs_are_penalized() {
        let plain = ZxcvbnScorer::default().assess("ferriswheel2024").unwrap();
        let personal = ZxcvbnScorer::with_user_inputs(vec!["ferriswheel2024".to_string()])
            .assess("ferriswheel2024")
            .unwrap();
        assert!(personal.score <= plain.score);
        assert!(personal.crack_time_seconds <= plain.crack_time_seconds);
    }

    #[test]
    fn test_assessment_is_stable() {
        let scorer = ZxcvbnScorer::default();
        let first = scorer.assess("correct horse battery").unwrap();
        let second = scorer.assess("correct horse battery").unwrap();
        assert_eq!(first, second);
    }
}
