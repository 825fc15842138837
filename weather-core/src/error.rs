use reqwest::StatusCode;
use thiserror::Error;

/// Why a single provider call did not yield a record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("provider answered with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// User-visible failure of a search. `Display` is the text shown in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a valid location.")]
    InvalidLocation,

    /// The provider rejected the query (non-2xx status).
    #[error("City not found.")]
    NotFound,

    /// Anything below HTTP status: connection, body read, malformed JSON.
    #[error("City not found. Please try again.")]
    Failed,
}

impl From<&FetchError> for SearchError {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Status { .. } => SearchError::NotFound,
            FetchError::Transport(_) | FetchError::Decode(_) => SearchError::Failed,
        }
    }
}
