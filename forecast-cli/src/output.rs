//! Terminal rendering of a forecast.

use crossterm::style::{Attribute, Color, ContentStyle};
use nws_forecast_core::ForecastResult;
use std::fmt::Write as _;

/// Text styles the renderer knows about. Combine by passing several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    Italic,
    Underline,
    Red,
    Yellow,
}

/// Applies [`Emphasis`] as ANSI escapes, or not at all when the output
/// is not an interactive terminal.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    styled: bool,
}

impl Painter {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Styled when stdout is a terminal.
    pub fn for_stdout() -> Self {
        use std::io::IsTerminal;
        Self::new(std::io::stdout().is_terminal())
    }

    pub fn paint(&self, text: &str, emphasis: &[Emphasis]) -> String {
        if !self.styled || emphasis.iter().all(|e| *e == Emphasis::Plain) {
            return text.to_string();
        }

        let mut style = ContentStyle::new();
        for e in emphasis {
            match e {
                Emphasis::Plain => {}
                Emphasis::Bold => style.attributes.set(Attribute::Bold),
                Emphasis::Italic => style.attributes.set(Attribute::Italic),
                Emphasis::Underline => style.attributes.set(Attribute::Underlined),
                Emphasis::Red => style.foreground_color = Some(Color::DarkRed),
                Emphasis::Yellow => style.foreground_color = Some(Color::DarkYellow),
            }
        }

        style.apply(text).to_string()
    }
}

const HEADING: &str = "Upcoming Weather Events";

/// Human-readable forecast: advisories, then one block per period.
pub fn render(result: &ForecastResult, painter: &Painter) -> String {
    let mut out = String::new();

    for advisory in &result.advisories {
        let _ = writeln!(
            out,
            "{}",
            painter.paint(&format!("! {}", advisory.description), &[Emphasis::Bold, Emphasis::Red])
        );
    }
    if !result.advisories.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(out, "{}", painter.paint(HEADING, &[Emphasis::Bold, Emphasis::Underline]));
    let _ = writeln!(out, "{}", "-".repeat(HEADING.len()));

    for period in &result.periods {
        let mut line = painter.paint(&format!("[{}]", period.label), &[Emphasis::Bold]);
        if !period.temperature.is_empty() {
            line.push(' ');
            line.push_str(&painter.paint(&period.temperature, &[Emphasis::Yellow]));
        }
        if !period.short_description.is_empty() {
            line.push_str(" - ");
            line.push_str(&painter.paint(&period.short_description, &[Emphasis::Italic]));
        }
        let _ = writeln!(out, "{line}");

        if !period.long_description.is_empty() {
            let _ = writeln!(out, "    {}", period.long_description);
        }
    }

    out
}
