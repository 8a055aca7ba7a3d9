// src/display/console.rs
use std::io;

use console::{Style, Term};

use crate::display::DisplaySurface;
use crate::models::{MeterView, StrengthLevel};

const BAR_WIDTH: usize = 20;

/// Terminal strength meter: colored bar, crack time, warning and suggestion list.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    view: MeterView,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &MeterView {
        &self.view
    }

    pub fn render(&self, term: &Term) -> io::Result<()> {
        for line in self.lines() {
            term.write_line(&line)?;
        }
        Ok(())
    }

    pub fn lines(&self) -> Vec<String> {
        let view = &self.view;
        let style = style_for(view.color.as_deref());
        let filled = usize::from(view.fill_percent) * BAR_WIDTH / 100;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

        let mut lines = vec![
            format!("Strength:   {} {}", style.apply_to(bar), style.clone().bold().apply_to(&view.label)),
            format!("Crack time: {}", view.crack_time),
            format!("Warning:    {}", view.warning),
        ];

        if !view.suggestions.is_empty() {
            lines.push("Suggestions:".to_string());
            lines.extend(view.suggestions.iter().map(|s| format!("  • {}", s)));
        }

        if let Some(password) = &view.suggested_password {
            lines.push(format!("Suggested:  {}", Style::new().cyan().apply_to(password)));
        }

        lines
    }
}

fn style_for(color: Option<&str>) -> Style {
    match color {
        Some("strength-0") => Style::new().red(),
        Some("strength-1") => Style::new().color256(208),
        Some("strength-2") => Style::new().yellow(),
        Some("strength-3") => Style::new().color256(112),
        Some("strength-4") => Style::new().green(),
        _ => Style::new(),
    }
}

impl DisplaySurface for ConsoleSurface {
    fn show_level(&mut self, level: &StrengthLevel) {
        self.view.show_level(level);
    }

    fn show_crack_time(&mut self, text: &str) {
        self.view.show_crack_time(text);
    }

    fn show_warning(&mut self, text: &str) {
        self.view.show_warning(text);
    }

    fn show_suggestions(&mut self, items: &[String]) {
        self.view.show_suggestions(items);
    }

    fn show_suggested_password(&mut self, password: Option<&str>) {
        self.view.show_suggested_password(password);
    }

    fn reset(&mut self) {
        self.view.reset();
    }
}
