use thiserror::Error;

/// Failure of a single resource request. Any error aborts the whole call;
/// no partial result is ever returned.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid request url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Error raised when a filter is set from a raw string (command line input).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter '{name}' (expected one of: {expected})")]
    Unknown { name: String, expected: String },

    #[error("invalid value '{value}' for filter '{name}'")]
    InvalidValue { name: String, value: String },
}
