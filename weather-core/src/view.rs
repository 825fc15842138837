//! Presentation model for the widget card.
//!
//! [`WidgetView`] is what a front-end draws: it holds the already-formatted text,
//! so terminal, web, or test renderers all show the same thing.

use std::fmt;

use crate::format::{self, Clock};
use crate::state::SearchState;

pub const TITLE: &str = "Weather Widget";
pub const SUBTITLE: &str = "Search for the current weather condition in your city";
pub const PLACEHOLDER: &str = "Enter a city name";

pub const THERMOMETER_ICON: &str = "\u{1f321}\u{fe0f}";
pub const CLOUD_ICON: &str = "\u{2601}\u{fe0f}";
pub const PIN_ICON: &str = "\u{1f4cd}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub input: String,
    pub button: ButtonView,
    pub error: Option<String>,
    /// Temperature, condition, location. Empty unless a record is held and no error is.
    pub details: Vec<DetailLine>,
}

impl WidgetView {
    pub fn new(state: &SearchState, clock: &dyn Clock) -> Self {
        let button = if state.is_loading() {
            ButtonView { label: "Loading...", enabled: false }
        } else {
            ButtonView { label: "Search", enabled: true }
        };

        let error = state.error().map(ToString::to_string);

        let details = match (state.record(), &error) {
            (Some(record), None) => vec![
                DetailLine {
                    icon: THERMOMETER_ICON,
                    text: format::temperature_message(record.temperature, record.unit),
                },
                DetailLine {
                    icon: CLOUD_ICON,
                    text: format::condition_message(&record.description),
                },
                DetailLine {
                    icon: PIN_ICON,
                    text: format::location_message(&record.location, clock),
                },
            ],
            _ => Vec::new(),
        };

        Self { input: state.input().to_string(), button, error, details }
    }
}

impl fmt::Display for WidgetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;

        let input = if self.input.is_empty() { PLACEHOLDER } else { self.input.as_str() };
        let button = if self.button.enabled {
            format!("[ {} ]", self.button.label)
        } else {
            format!("( {} )", self.button.label)
        };
        writeln!(f, "> {input}  {button}")?;

        if let Some(error) = &self.error {
            writeln!(f)?;
            writeln!(f, "{error}")?;
        }

        if !self.details.is_empty() {
            writeln!(f)?;
            for line in &self.details {
                writeln!(f, "{} {}", line.icon, line.text)?;
            }
        }

        Ok(())
    }
}
