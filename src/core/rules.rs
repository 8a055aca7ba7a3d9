// src/core/rules.rs

// Minimum security requirements checked for weak passwords
#[derive(Debug, Clone, Copy)]
pub struct ValidationRuleSet {
    pub special_chars: &'static str,
    pub min_length: usize,
}

pub const TOO_COMMON_MESSAGE: &str =
    "This password is too common or can be cracked quickly. Consider using a more unique combination.";

impl ValidationRuleSet {
    pub const STANDARD: ValidationRuleSet = ValidationRuleSet {
        special_chars: "!@#$%^&*(),.?\":{}|<>",
        min_length: 12,
    };

    pub fn has_uppercase(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_uppercase())
    }

    pub fn has_lowercase(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_lowercase())
    }

    pub fn has_number(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_digit())
    }

    pub fn has_special(&self, password: &str) -> bool {
        password.chars().any(|c| self.special_chars.contains(c))
    }

    pub fn meets_min_length(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }

    /// One instruction per failing rule, in a fixed order.
    pub fn failures(&self, password: &str) -> Vec<String> {
        let mut feedback = Vec::new();

        if !self.has_uppercase(password) {
            feedback.push("Add at least one uppercase letter".to_string());
        }
        if !self.has_lowercase(password) {
            feedback.push("Add at least one lowercase letter".to_string());
        }
        if !self.has_number(password) {
            feedback.push("Add at least one number".to_string());
        }
        if !self.has_special(password) {
            feedback.push("Add at least one special character".to_string());
        }
        if !self.meets_min_length(password) {
            feedback.push(format!("Password should be at least {} characters long", self.min_length));
        }

        feedback
    }

    /// Local feedback shown ahead of the scorer's own suggestions.
    ///
    /// Rule failures are only reported for scores below 2, so strong and
    /// moderate passwords are not cluttered with them. The commonality
    /// warning is added whatever the score.
    pub fn feedback(&self, password: &str, score: u8, too_common: bool) -> Vec<String> {
        let mut feedback = if score < 2 { self.failures(password) } else { Vec::new() };
        if too_common {
            feedback.push(TOO_COMMON_MESSAGE.to_string());
        }
        feedback
    }
}

impl Default for ValidationRuleSet {
    fn default() -> Self {
        Self::STANDARD
    }
}
