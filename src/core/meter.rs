// src/core/meter.rs
use crate::core::policy::{PolicyMode, ScorePolicy};
use crate::core::rules::ValidationRuleSet;
use crate::display::DisplaySurface;
use crate::generators::{PasswordEnhancer, RandomSource};
use crate::models::{StrengthAssessment, StrengthLevel, SuggestionOutcome};
use crate::scoring::{Result, StrengthScorer};
use crate::utils::redact;

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
const NO_SUGGESTIONS: &str = "No suggestions available";
const NO_WARNINGS: &str = "No warnings";

/// Everything derived from one scorer call.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub assessment: StrengthAssessment,
    pub score: u8,
    pub too_common: bool,
    /// Local feedback followed by the scorer's suggestions
    pub suggestions: Vec<String>,
}

/// Wires a scorer, the enhancement heuristic and a display surface together.
pub struct PasswordMeter<S: StrengthScorer, D: DisplaySurface> {
    scorer: S,
    surface: D,
    policy: ScorePolicy,
    rules: ValidationRuleSet,
    enhancer: PasswordEnhancer,
    rng: Box<dyn RandomSource>,
    max_attempts: usize,
}

impl<S: StrengthScorer, D: DisplaySurface> PasswordMeter<S, D> {
    pub fn new(scorer: S, surface: D, mode: PolicyMode, rng: Box<dyn RandomSource>) -> Self {
        if mode == PolicyMode::TextMatch {
            log::warn!("Text-match reconciliation relies on the scorer's English crack time wording");
        }
        Self {
            scorer,
            surface,
            policy: ScorePolicy::new(mode),
            rules: ValidationRuleSet::STANDARD,
            enhancer: PasswordEnhancer::new(),
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Attempt bound for the text-match retry loop.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn policy(&self) -> &ScorePolicy {
        &self.policy
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Scores a password without touching the display. `None` for empty input.
    pub fn analyze(&self, password: &str) -> Result<Option<Evaluation>> {
        if password.is_empty() {
            return Ok(None);
        }

        let assessment = self.scorer.assess(password)?;
        let score = self.policy.reconcile(&assessment);
        let too_common = self.policy.is_too_common(&assessment);

        let mut suggestions = self.rules.feedback(password, score, too_common);
        suggestions.extend(assessment.suggestions.iter().cloned());
        if suggestions.is_empty() {
            suggestions.push(NO_SUGGESTIONS.to_string());
        }

        log::debug!(
            "Assessed {}: score {} reconciled to {} ({})",
            redact(password), assessment.score, score, assessment.crack_time_display
        );

        Ok(Some(Evaluation { assessment, score, too_common, suggestions }))
    }

    /// Re-runs the whole pipeline and overwrites every display field.
    pub fn evaluate(&mut self, password: &str) -> Result<Option<Evaluation>> {
        let evaluation = match self.analyze(password)? {
            Some(evaluation) => evaluation,
            None => {
                self.surface.reset();
                return Ok(None);
            }
        };

        self.surface.show_level(StrengthLevel::for_score(evaluation.score));
        self.surface.show_crack_time(&evaluation.assessment.crack_time_display);
        self.surface.show_warning(evaluation.assessment.warning.as_deref().unwrap_or(NO_WARNINGS));
        self.surface.show_suggestions(&evaluation.suggestions);
        self.surface.show_suggested_password(None);

        Ok(Some(evaluation))
    }

    /// Decides whether and how to strengthen `password`, without touching the display.
    pub fn plan_suggestion(&mut self, password: &str) -> Result<SuggestionOutcome> {
        if password.is_empty() {
            return Ok(SuggestionOutcome::Empty);
        }

        let assessment = self.scorer.assess(password)?;
        let score = self.policy.reconcile(&assessment);
        if score >= 3 {
            return Ok(SuggestionOutcome::AlreadyStrong);
        }

        let outcome = match self.policy.mode() {
            // Accepted as-is, even when the enhanced password still rates weak
            PolicyMode::Threshold => SuggestionOutcome::Enhanced {
                password: self.enhancer.enhance(password, self.rng.as_mut()),
                attempts: 1,
            },
            PolicyMode::TextMatch => {
                if self.policy.is_too_common(&assessment) {
                    SuggestionOutcome::TooCommon
                } else if score == 2 {
                    self.enhance_until_sufficient(password)?
                } else {
                    SuggestionOutcome::Ineligible
                }
            }
        };

        Ok(outcome)
    }

    fn enhance_until_sufficient(&mut self, password: &str) -> Result<SuggestionOutcome> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.enhancer.enhance(password, self.rng.as_mut());
            let assessment = self.scorer.assess(&candidate)?;
            if self.policy.has_sufficient_crack_time(&assessment) {
                return Ok(SuggestionOutcome::Enhanced { password: candidate, attempts: attempt });
            }
            log::debug!("Attempt {} reached only {}", attempt, assessment.crack_time_display);
        }

        log::info!("No sufficiently strong variant of {} after {} attempts", redact(password), self.max_attempts);
        Ok(SuggestionOutcome::Exhausted { attempts: self.max_attempts })
    }

    /// The "suggest stronger password" action.
    ///
    /// An enhanced password replaces the input and is evaluated in full;
    /// any other outcome shows its canned guidance and leaves the input alone.
    pub fn suggest(&mut self, password: &str) -> Result<SuggestionOutcome> {
        let outcome = self.plan_suggestion(password)?;

        match &outcome {
            SuggestionOutcome::Empty => {}
            SuggestionOutcome::Enhanced { password: enhanced, attempts } => {
                log::info!("Suggested a stronger password after {} attempt(s)", attempts);
                self.evaluate(enhanced)?;
                self.surface.show_suggested_password(Some(enhanced));
            }
            other => {
                if let Some((warning, tips)) = other.guidance() {
                    let tips: Vec<String> = tips.iter().map(|t| t.to_string()).collect();
                    self.surface.show_warning(warning);
                    self.surface.show_suggestions(&tips);
                    self.surface.show_suggested_password(None);
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::TOO_COMMON_MESSAGE;
    use crate::generators::random::testing::ScriptedSource;
    use crate::generators::RngSource;
    use crate::models::MeterView;
    use crate::scoring::testing::{assessment, FixedScorer};
    use crate::scoring::ZxcvbnScorer;

    fn meter<S: StrengthScorer>(scorer: S, mode: PolicyMode) -> PasswordMeter<S, MeterView> {
        PasswordMeter::new(scorer, MeterView::default(), mode, Box::new(RngSource::seeded(11)))
    }

    #[test]
    fn test_common_password_feedback() {
        let mut meter = meter(ZxcvbnScorer::default(), PolicyMode::Threshold);
        let evaluation = meter.evaluate("password").unwrap().unwrap();

        assert_eq!(evaluation.assessment.score, 0);
        assert_eq!(evaluation.score, 0);
        assert!(evaluation.too_common);
        for expected in [
            "Add at least one uppercase letter",
            "Add at least one number",
            "Add at least one special character",
            "Password should be at least 12 characters long",
            TOO_COMMON_MESSAGE,
        ] {
            assert!(evaluation.suggestions.iter().any(|s| s == expected), "missing {}", expected);
        }

        let view = meter.surface();
        assert_eq!(view.label, "Very Weak");
        assert_eq!(view.color.as_deref(), Some("strength-0"));
        assert_ne!(view.warning, "-");
    }

    #[test]
    fn test_local_feedback_precedes_scorer_suggestions() {
        let mut weak = assessment(1, 30.0, "30 seconds");
        weak.suggestions = vec!["Add another word or two".to_string()];
        let scorer = FixedScorer::new(weak);
        let mut meter = meter(scorer, PolicyMode::Threshold);

        let evaluation = meter.evaluate("abc").unwrap().unwrap();
        assert_eq!(evaluation.suggestions.first().map(String::as_str), Some("Add at least one uppercase letter"));
        assert_eq!(evaluation.suggestions.last().map(String::as_str), Some("Add another word or two"));
        assert_eq!(meter.surface().warning, "No warnings");
    }

    #[test]
    fn test_no_suggestions_placeholder() {
        let scorer = FixedScorer::new(assessment(4, 1e12, "centuries"));
        let mut meter = meter(scorer, PolicyMode::Threshold);
        meter.evaluate("Tq7#vLp2!xZr9@Wm4$Kd").unwrap();
        assert_eq!(meter.surface().suggestions, vec![NO_SUGGESTIONS.to_string()]);
        assert_eq!(meter.surface().label, "Very Strong");
    }

    #[test]
    fn test_empty_input_resets_without_scoring() {
        let scorer = FixedScorer::new(assessment(4, 1e12, "centuries"));
        let mut meter = meter(scorer, PolicyMode::Threshold);
        meter.evaluate("something").unwrap();
        assert_ne!(meter.surface(), &MeterView::default());

        assert!(meter.evaluate("").unwrap().is_none());
        assert_eq!(meter.surface(), &MeterView::default());
        assert_eq!(meter.surface().label, "Very Weak");
        assert_eq!(meter.surface().crack_time, "-");
        assert_eq!(meter.surface().warning, "-");
        assert!(meter.surface().suggestions.is_empty());
        assert_eq!(meter.scorer.calls(), 1);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let mut meter = meter(ZxcvbnScorer::default(), PolicyMode::Threshold);
        let first = meter.evaluate("Winter2024!").unwrap();
        let first_view = meter.surface().clone();
        let second = meter.evaluate("Winter2024!").unwrap();
        assert_eq!(first, second);
        assert_eq!(&first_view, meter.surface());
    }

    #[test]
    fn test_threshold_reconciliation_in_display() {
        // Rated 4 by the scorer but crackable within the hour
        let scorer = FixedScorer::new(assessment(4, 1_800.0, "30 minutes"));
        let mut meter = meter(scorer, PolicyMode::Threshold);
        let evaluation = meter.evaluate("aaaaaaaaaaaaaaaaaaaaaaa").unwrap().unwrap();
        assert_eq!(evaluation.score, 1);
        assert_eq!(meter.surface().label, "Weak");
    }

    #[test]
    fn test_empty_suggestion_is_noop() {
        let scorer = FixedScorer::new(assessment(0, 1.0, "1 second"));
        let mut meter = meter(scorer, PolicyMode::Threshold);
        assert_eq!(meter.suggest("").unwrap(), SuggestionOutcome::Empty);
        assert_eq!(meter.surface(), &MeterView::default());
        assert_eq!(meter.scorer.calls(), 0);
    }

    #[test]
    fn test_strong_password_is_left_alone() {
        let scorer = FixedScorer::new(assessment(4, 1e12, "centuries"));
        let mut meter = meter(scorer, PolicyMode::Threshold);
        assert_eq!(meter.suggest("Tq7#vLp2!xZr9@Wm4$Kd").unwrap(), SuggestionOutcome::AlreadyStrong);

        let view = meter.surface();
        assert_eq!(view.warning, "Your password is already strong! No suggestions needed.");
        assert_eq!(view.suggestions.len(), 2);
        assert!(view.suggested_password.is_none());
    }

    #[test]
    fn test_threshold_always_accepts_enhancement() {
        // Enhanced candidates still score weak; they are accepted anyway
        let scorer = FixedScorer::new(assessment(1, 120.0, "2 minutes"))
            .with("password", assessment(0, 0.1, "less than a second"));
        let mut meter = PasswordMeter::new(scorer, MeterView::default(), PolicyMode::Threshold, Box::new(ScriptedSource::maxes()));

        let outcome = meter.suggest("password").unwrap();
        let expected = "Password***999zzzzzz";
        assert_eq!(outcome, SuggestionOutcome::Enhanced { password: expected.to_string(), attempts: 1 });

        let view = meter.surface();
        assert_eq!(view.suggested_password.as_deref(), Some(expected));
        assert_eq!(view.label, "Weak");
        assert_eq!(view.crack_time, "2 minutes");
    }

    #[test]
    fn test_text_match_refuses_common_password() {
        let scorer = FixedScorer::new(assessment(2, 5_000.0, "1 hour"));
        let mut meter = meter(scorer, PolicyMode::TextMatch);

        assert_eq!(meter.suggest("Summer2024").unwrap(), SuggestionOutcome::TooCommon);
        assert!(meter.surface().warning.starts_with("This password is too common"));
        assert_eq!(meter.scorer.calls(), 1);
    }

    #[test]
    fn test_text_match_accepts_first_sufficient_attempt() {
        let scorer = FixedScorer::new(assessment(4, 1e12, "centuries"))
            .with("moderate1x", assessment(2, 400_000.0, "5 days"));
        let mut meter = meter(scorer, PolicyMode::TextMatch);

        let outcome = meter.suggest("moderate1x").unwrap();
        match &outcome {
            SuggestionOutcome::Enhanced { password, attempts } => {
                assert_eq!(*attempts, 1);
                assert!(password.chars().count() >= 20);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(meter.surface().suggested_password.as_deref(), outcome.suggested_password());
        assert_eq!(meter.surface().crack_time, "centuries");
    }

    #[test]
    fn test_text_match_gives_up_after_bounded_attempts() {
        // Every enhanced candidate stays at "11 days", never a decade
        let scorer = FixedScorer::new(assessment(3, 1_000_000.0, "11 days"))
            .with("moderate1x", assessment(2, 400_000.0, "5 days"));
        let mut meter = meter(scorer, PolicyMode::TextMatch);

        let outcome = meter.suggest("moderate1x").unwrap();
        assert_eq!(outcome, SuggestionOutcome::Exhausted { attempts: 5 });
        assert_eq!(meter.scorer.calls(), 6);

        let view = meter.surface();
        assert!(view.warning.starts_with("Unable to create a suitable stronger version"));
        assert_eq!(view.suggestions.len(), 3);
        assert!(view.suggested_password.is_none());
    }

    #[test]
    fn test_max_attempts_is_configurable() {
        let scorer = FixedScorer::new(assessment(3, 1_000_000.0, "11 days"))
            .with("moderate1x", assessment(2, 400_000.0, "5 days"));
        let mut meter = meter(scorer, PolicyMode::TextMatch).with_max_attempts(2);

        assert_eq!(meter.suggest("moderate1x").unwrap(), SuggestionOutcome::Exhausted { attempts: 2 });
        assert_eq!(meter.scorer.calls(), 3);
    }

    #[test]
    fn test_text_match_already_strong() {
        let scorer = FixedScorer::new(assessment(3, 100.0, "2 minutes"));
        let mut meter = meter(scorer, PolicyMode::TextMatch);
        assert_eq!(meter.suggest("whatever").unwrap(), SuggestionOutcome::AlreadyStrong);
    }
}
