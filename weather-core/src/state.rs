//! Search state - the widget's single source of truth
//!
//! Record and error live in one [`Outcome`] so they can never be present at the
//! same time. Every submission gets a token; only the response carrying the
//! latest token may change the state, so a slow stale response cannot overwrite
//! a newer one.

use crate::error::{FetchError, SearchError};
use crate::model::WeatherRecord;

/// Last result shown by the widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    #[default]
    None,
    Record(WeatherRecord),
    Error(SearchError),
}

/// Derived view of the state, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase<'a> {
    Idle,
    Loading,
    Error(&'a SearchError),
    Success(&'a WeatherRecord),
}

/// Handed out by [`SearchState::submit`]; identifies one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub token: u64,
    /// Trimmed location text to send to the provider.
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    input: String,
    outcome: Outcome,
    loading: bool,
    latest_token: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match &self.outcome {
            Outcome::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SearchError> {
        match &self.outcome {
            Outcome::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Loading wins over whatever result is still held from a previous search.
    pub fn phase(&self) -> Phase<'_> {
        if self.loading {
            return Phase::Loading;
        }
        match &self.outcome {
            Outcome::None => Phase::Idle,
            Outcome::Record(record) => Phase::Success(record),
            Outcome::Error(err) => Phase::Error(err),
        }
    }

    /// Keystroke: replace the raw input text. Nothing else changes.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Form submission.
    ///
    /// Blank input fails locally: the error is set, any record is dropped, and no
    /// ticket is issued. Otherwise the state enters loading, clears the error, and
    /// returns the ticket for the one request the caller must make.
    ///
    /// Either way the submission supersedes any request still in flight.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        self.latest_token += 1;

        let query = self.input.trim();
        if query.is_empty() {
            self.outcome = Outcome::Error(SearchError::InvalidLocation);
            self.loading = false;
            return None;
        }

        let query = query.to_string();
        self.loading = true;
        if matches!(self.outcome, Outcome::Error(_)) {
            self.outcome = Outcome::None;
        }

        Some(SearchTicket { token: self.latest_token, query })
    }

    /// Apply the result of the request identified by `token`.
    ///
    /// Returns `false` and leaves the state untouched when a newer submission has
    /// been made since the ticket was issued.
    pub fn resolve(&mut self, token: u64, result: Result<WeatherRecord, FetchError>) -> bool {
        if token != self.latest_token {
            tracing::debug!(token, latest = self.latest_token, "dropping stale response");
            return false;
        }

        self.outcome = match result {
            Ok(record) => Outcome::Record(record),
            Err(err) => Outcome::Error(SearchError::from(&err)),
        };
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn paris() -> WeatherRecord {
        WeatherRecord::celsius(22.0, "Partly Cloudy", "Paris")
    }

    fn not_found() -> FetchError {
        FetchError::Status { status: StatusCode::NOT_FOUND, body: String::new() }
    }

    fn assert_exclusive(state: &SearchState) {
        assert!(
            !(state.record().is_some() && state.error().is_some()),
            "record and error both present: {state:?}"
        );
    }

    #[test]
    fn new_state_is_idle() {
        let state = SearchState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.input(), "");
    }

    #[test]
    fn blank_submit_sets_validation_error_without_ticket() {
        for input in ["", " ", "\t\n  "] {
            let mut state = SearchState { outcome: Outcome::Record(paris()), ..Default::default() };
            state.set_input(input);

            assert_eq!(state.submit(), None);
            assert_eq!(state.phase(), Phase::Error(&SearchError::InvalidLocation));
            assert!(state.record().is_none());
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn submit_trims_and_enters_loading() {
        let mut state = SearchState {
            outcome: Outcome::Error(SearchError::InvalidLocation),
            ..Default::default()
        };
        state.set_input("  Paris ");

        let ticket = state.submit().expect("non-blank input issues a ticket");

        assert_eq!(ticket.query, "Paris");
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.error().is_none());
        assert_eq!(state.input(), "  Paris ", "raw input is kept as typed");
    }

    #[test]
    fn previous_record_is_kept_while_loading() {
        let mut state = SearchState { outcome: Outcome::Record(paris()), ..Default::default() };
        state.set_input("Oslo");

        state.submit().expect("ticket");

        assert!(state.is_loading());
        assert_eq!(state.record(), Some(&paris()));
    }

    #[test]
    fn resolve_success_stores_record_and_clears_loading() {
        let mut state = SearchState::new();
        state.set_input("Paris");
        let ticket = state.submit().expect("ticket");

        assert!(state.resolve(ticket.token, Ok(paris())));

        assert_eq!(state.phase(), Phase::Success(&paris()));
        assert!(!state.is_loading());
    }

    #[test]
    fn resolve_http_failure_reports_not_found() {
        let mut state = SearchState { outcome: Outcome::Record(paris()), ..Default::default() };
        state.set_input("Atlantis");
        let ticket = state.submit().expect("ticket");

        state.resolve(ticket.token, Err(not_found()));

        assert_eq!(state.phase(), Phase::Error(&SearchError::NotFound));
        assert!(state.record().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = SearchState::new();
        state.set_input("Paris");
        let first = state.submit().expect("first ticket");
        state.set_input("Oslo");
        let second = state.submit().expect("second ticket");
        assert!(second.token > first.token);

        let oslo = WeatherRecord::celsius(-2.0, "Snow", "Oslo");
        assert!(state.resolve(second.token, Ok(oslo.clone())));
        assert!(!state.resolve(first.token, Ok(paris())));

        assert_eq!(state.record(), Some(&oslo));
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_response_does_not_end_newer_loading() {
        let mut state = SearchState::new();
        state.set_input("Paris");
        let first = state.submit().expect("first ticket");
        state.set_input("Oslo");
        state.submit().expect("second ticket");

        assert!(!state.resolve(first.token, Err(not_found())));

        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn blank_submit_supersedes_pending_request() {
        let mut state = SearchState::new();
        state.set_input("Paris");
        let pending = state.submit().expect("ticket");
        state.set_input("");
        state.submit();

        assert!(!state.resolve(pending.token, Ok(paris())));

        assert_eq!(state.phase(), Phase::Error(&SearchError::InvalidLocation));
        assert!(!state.is_loading());
    }

    #[test]
    fn record_and_error_never_coexist() {
        let mut state = SearchState::new();
        assert_exclusive(&state);

        let inputs = ["Paris", "  ", "Atlantis", "Paris", "", "Oslo"];
        for (i, input) in inputs.into_iter().enumerate() {
            state.set_input(input);
            let ticket = state.submit();
            assert_exclusive(&state);

            if let Some(ticket) = ticket {
                let result = if i % 2 == 0 { Ok(paris()) } else { Err(not_found()) };
                state.resolve(ticket.token, result);
                assert_exclusive(&state);
            }
        }
    }
}
