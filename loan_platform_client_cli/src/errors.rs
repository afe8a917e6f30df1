use reqwest::{StatusCode, Url};
use thiserror::Error;

/// **An application-specific error type**
///
/// Any of these aborts the script; nothing is retried.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Connection refused, DNS failure, timeout or a broken response body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    UnexpectedStatus { url: Url, status: StatusCode },

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to write the script output: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScriptResult<T> = Result<T, ScriptError>;
