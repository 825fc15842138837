//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weatherapi.com client behind the `WeatherProvider` abstraction
//! - The search form state machine and its controller
//! - Message formatting and the presentation model
//!
//! It is used by `weather-widget-cli`, but any front-end can drive a
//! `SearchController` and draw a `WidgetView`.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod state;
pub mod view;

pub use config::Config;
pub use controller::SearchController;
pub use error::{FetchError, SearchError};
pub use format::{Clock, FixedHour, LocalClock};
pub use model::WeatherRecord;
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use state::{Outcome, Phase, SearchState, SearchTicket};
pub use view::WidgetView;
