use serde::{Deserialize, Serialize};

/// Coarse category of a failed `/decompose` call, derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// 401: the session is gone.
    Unauthorized,
    /// 500: the service itself is misconfigured or down.
    Internal,
    Http,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            500 => Self::Internal,
            _ => Self::Http,
        }
    }
}

/// Error body the decomposition service returns alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
