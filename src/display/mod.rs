// src/display/mod.rs
use crate::models::{MeterView, StrengthLevel};

pub mod console;

pub use console::ConsoleSurface;

/// Where strength feedback is rendered. Every call overwrites the previous value of its field.
pub trait DisplaySurface {
    fn show_level(&mut self, level: &StrengthLevel);
    fn show_crack_time(&mut self, text: &str);
    fn show_warning(&mut self, text: &str);
    fn show_suggestions(&mut self, items: &[String]);
    fn show_suggested_password(&mut self, password: Option<&str>);

    /// Back to the empty-input state.
    fn reset(&mut self);
}

impl DisplaySurface for MeterView {
    fn show_level(&mut self, level: &StrengthLevel) {
        self.score = level.score;
        self.label = level.label.to_string();
        self.color = Some(level.color.to_string());
        self.fill_percent = level.fill_percent;
    }

    fn show_crack_time(&mut self, text: &str) {
        self.crack_time = text.to_string();
    }

    fn show_warning(&mut self, text: &str) {
        self.warning = text.to_string();
    }

    fn show_suggestions(&mut self, items: &[String]) {
        self.suggestions = items.to_vec();
    }

    fn show_suggested_password(&mut self, password: Option<&str>) {
        self.suggested_password = password.map(String::from);
    }

    fn reset(&mut self) {
        *self = MeterView::default();
    }
}
