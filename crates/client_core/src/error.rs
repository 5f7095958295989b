use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecomposeError {
    #[error("invalid server url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid session cookie: {0}")]
    InvalidCookie(String),
    /// Non-2xx status. `message` carries the body's `error` field when the
    /// body was JSON and the field was non-empty.
    #[error("server error: {status} {reason}")]
    Status {
        status: u16,
        reason: String,
        message: Option<String>,
    },
    #[error("{0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}
