//! Human-readable phrasing for a [`WeatherRecord`](crate::WeatherRecord).
//!
//! All functions here are pure. The day/night wording depends on the time of
//! day, which is passed in through a [`Clock`] rather than read from the system.

use chrono::{Local, Timelike};

use crate::model::CELSIUS;

/// Source of the caller's local wall-clock hour (0-23).
pub trait Clock {
    fn hour(&self) -> u32;
}

/// Reads the hour from the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHour(pub u32);

impl Clock for FixedHour {
    fn hour(&self) -> u32 {
        self.0
    }
}

/// Brackets are closed on their lower edge: exactly 0 is "quite cold", exactly 10 is
/// "comfortable", and so on. Units other than Celsius get no qualitative wording.
pub fn temperature_message(temperature: f64, unit: char) -> String {
    if unit != CELSIUS {
        return format!("{temperature}°{unit}.");
    }

    match temperature {
        t if t < 0.0 => format!("It's freezing at {t}°C! Bundle up!"),
        t if t < 10.0 => format!("It's quite cold at {t}°C. Wear warm clothes."),
        t if t < 20.0 => format!("The temperature is {t}°C. Comfortable for a light jacket."),
        t if t < 30.0 => format!("It's a pleasant {t}°C. Enjoy the nice weather."),
        t => format!("It's hot at {t}°C. Stay hydrated!"),
    }
}

/// Canned sentence for well-known conditions; anything else is returned as-is.
pub fn condition_message(description: &str) -> String {
    let canned = match description.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "The sky is partly cloudy. A mix of sun and clouds.",
        "rain" => "It's raining. Don't forget your umbrella!",
        "snow" => "It's snowing. Bundle up and stay warm!",
        "clear" => "The sky is clear. It's a nice day!",
        _ => return description.to_string(),
    };
    canned.to_string()
}

/// Night is 18:00 up to (not including) 06:00 on the caller's clock,
/// regardless of the location's own time zone.
pub fn location_message(location: &str, clock: &dyn Clock) -> String {
    let hour = clock.hour();
    let is_night = hour >= 18 || hour < 6;
    format!("{location} {}", if is_night { "at night" } else { "during the day" })
}
