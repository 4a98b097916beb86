use reqwest::StatusCode;
use thiserror::Error;

/// Why a single lookup stage could not produce its value.
#[derive(Debug, Error)]
pub enum LookupFailure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upstream responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("expected exactly one match, found {0}")]
    MatchCount(usize),
}

/// Error kinds surfaced by the lookup pipeline.
///
/// Each stage fails with its own kind; the orchestrator passes them through
/// untouched, so callers can tell which stage gave up.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("invalid city result")]
    InvalidCityResult(#[source] LookupFailure),

    #[error("invalid lat/long result")]
    InvalidLatLongResult(#[source] LookupFailure),

    #[error("unable to parse weather results")]
    WeatherParse(#[source] LookupFailure),

    #[error("invalid parameters: {0}")]
    InvalidParameter(String),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl WeatherError {
    pub(crate) fn missing(what: &str) -> Self {
        WeatherError::InvalidParameter(format!("{what} is required"))
    }

    /// The underlying stage failure, when there is one.
    pub fn lookup_failure(&self) -> Option<&LookupFailure> {
        match self {
            WeatherError::InvalidCityResult(f)
            | WeatherError::InvalidLatLongResult(f)
            | WeatherError::WeatherParse(f) => Some(f),
            WeatherError::InvalidParameter(_) | WeatherError::Client(_) => None,
        }
    }
}
