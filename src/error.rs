//! Error types for the dat client.
//!
//! These errors never reach code using the macro surface: the delivery path
//! swallows them and logs at debug level. They are public so callers using
//! `Dat::try_new` or `Config::try_from_env` can inspect failures directly.

use thiserror::Error;

/// Result type alias using the dat error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or talking to the debug server.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct http client: {0}")]
    Client(#[source] reqwest::Error),

    /// A request to the debug server failed (unreachable, timed out, ...).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An environment override held a value that could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
