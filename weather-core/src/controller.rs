use crate::provider::WeatherProvider;
use crate::state::{SearchState, SearchTicket};

/// Owns the search form state and drives one fetch per submission.
///
/// The provider (and with it the API key) is injected at construction.
#[derive(Debug)]
pub struct SearchController<P> {
    provider: P,
    state: SearchState,
}

impl<P: WeatherProvider> SearchController<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, state: SearchState::new() }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    /// Take `input` as the current text and submit it.
    ///
    /// Blank input fails without touching the network. Otherwise exactly one
    /// provider call is made and its outcome lands in the state; loading is
    /// cleared whichever way the call ends.
    pub async fn handle_search(&mut self, input: &str) -> &SearchState {
        self.state.set_input(input);

        let Some(ticket) = self.begin() else {
            return &self.state;
        };
        self.complete(ticket).await;

        &self.state
    }

    /// First half of [`handle_search`](Self::handle_search): validate and enter
    /// loading. Lets a caller render the loading state before awaiting the fetch.
    pub fn begin(&mut self) -> Option<SearchTicket> {
        let ticket = self.state.submit();
        match &ticket {
            Some(ticket) => {
                tracing::debug!(token = ticket.token, query = %ticket.query, "dispatching request");
            }
            None => tracing::debug!("rejected blank location"),
        }
        ticket
    }

    /// Second half: perform the request for `ticket` and apply its result.
    pub async fn complete(&mut self, ticket: SearchTicket) -> &SearchState {
        let result = self.provider.current(&ticket.query).await;

        match &result {
            Ok(record) => tracing::debug!(
                token = ticket.token,
                location = %record.location,
                temperature = record.temperature,
                "weather request succeeded"
            ),
            Err(err) => {
                tracing::warn!(token = ticket.token, query = %ticket.query, "request failed: {err}");
            }
        }

        self.state.resolve(ticket.token, result);
        &self.state
    }
}
