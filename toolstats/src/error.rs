use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationError {
    #[error("expected H:M:S, got {0:?}")]
    FieldCount(String),

    #[error("invalid {field} in duration {input:?}")]
    Number { field: &'static str, input: String },
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to fetch {what}: HTTP {status}")]
    Fetch { what: String, status: StatusCode },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response for {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duration parse error: {0}")]
    Parse(#[from] DurationError),
}

pub type Result<T> = std::result::Result<T, StatsError>;
