use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_widget_core::{
    Config, LocalClock, SearchController, WeatherApiProvider, WidgetView, provider_from_config,
    provider::weatherapi::DEFAULT_BASE_URL, view::PLACEHOLDER,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city, in your terminal")]
pub struct Cli {
    /// weatherapi.com API key; takes precedence over the config file.
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Provider endpoint root, e.g. "http://api.weatherapi.com/v1".
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Defaults to `search` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key (and optionally a custom endpoint) in the config file.
    Configure,

    /// Prompt for cities in a loop and show the weather card after each search.
    Search,

    /// Look up one location, print the card and exit.
    Show {
        /// City or location name.
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let Cli { api_key, base_url, command } = self;

        let command = command.unwrap_or(Command::Search);
        tracing::debug!(?command, "starting");

        match command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Search => {
                let config = Config::load()?.with_overrides(api_key, base_url);
                tracing::debug!(base_url = config.base_url(), "resolved configuration");
                interactive(SearchController::new(provider_from_config(&config))).await?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { location } => {
                let config = Config::load()?.with_overrides(api_key, base_url);
                tracing::debug!(base_url = config.base_url(), "resolved configuration");
                let mut controller = SearchController::new(provider_from_config(&config));

                let state = controller.handle_search(&location).await;
                print!("{}", WidgetView::new(state, &LocalClock));

                Ok(if state.error().is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("weatherapi.com API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("API key prompt aborted")?;

    let base_url = Text::new("Endpoint root:")
        .with_default(config.base_url())
        .prompt()
        .context("Endpoint prompt aborted")?;

    config.api_key = Some(api_key.trim().to_string());
    config.base_url = match base_url.trim() {
        "" | DEFAULT_BASE_URL => None,
        custom => Some(custom.to_string()),
    };

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

/// Prompt, search, print; until the user cancels with Esc or Ctrl-C.
async fn interactive(mut controller: SearchController<WeatherApiProvider>) -> anyhow::Result<()> {
    let clock = LocalClock;
    println!("{}", WidgetView::new(controller.state(), &clock));

    loop {
        let previous = controller.state().input().to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Text::new("City:").with_placeholder(PLACEHOLDER).with_initial_value(&previous).prompt()
        })
        .await
        .context("Prompt task failed")?;

        let input = match answer {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        controller.set_input(input);
        if let Some(ticket) = controller.begin() {
            println!("{}", WidgetView::new(controller.state(), &clock));
            controller.complete(ticket).await;
        }
        println!("{}", WidgetView::new(controller.state(), &clock));
    }

    Ok(())
}
