use serde::{Deserialize, Serialize};

/// Unit code stamped on every record built from the provider.
pub const CELSIUS: char = 'C';

/// Normalized result of one successful query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: f64,
    pub description: String,
    /// Display name resolved by the provider; may differ from what the user typed.
    pub location: String,
    pub unit: char,
}

impl WeatherRecord {
    pub fn celsius(
        temperature: f64,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            temperature,
            description: description.into(),
            location: location.into(),
            unit: CELSIUS,
        }
    }
}
