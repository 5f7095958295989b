//! Outcome modeling for controller operations and mapping of API results
//! onto UI states.

use client_core::DecomposeError;
use shared::{
    error::ErrorCode,
    protocol::{DecomposeBody, DecomposeResponse},
};

use crate::{controller::state::UiState, presentation::Messages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Steps and/or encouragement rendered.
    Rendered,
    /// Blank input; no request sent.
    ValidationFailed,
    /// Logged out before sending, or the service answered 401.
    Unauthenticated,
    /// HTTP 500.
    ServerError,
    /// Any other non-2xx status.
    HttpError,
    /// 2xx whose body carried only an `error` field.
    ServiceError,
    /// 2xx with none of steps/encouragement/error.
    MalformedResponse,
    /// Network failure or undecodable 2xx body.
    TransportError,
}

impl SubmitOutcome {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rendered => "rendered",
            Self::ValidationFailed => "validation_failed",
            Self::Unauthenticated => "unauthenticated",
            Self::ServerError => "server_error",
            Self::HttpError => "http_error",
            Self::ServiceError => "service_error",
            Self::MalformedResponse => "malformed_response",
            Self::TransportError => "transport_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakdownOutcome {
    /// Title stashed and the page sent to `/`.
    Navigated,
    MissingTitle,
    StashUnavailable,
}

/// Maps the result of a `/decompose` call onto the state to display.
pub fn resolve_response(
    result: Result<DecomposeResponse, DecomposeError>,
    messages: &Messages,
) -> (UiState, SubmitOutcome) {
    match result {
        Ok(response) => match response.classify() {
            DecomposeBody::Decomposition {
                steps,
                encouragement,
            } => {
                let steps = if steps.is_empty() {
                    messages.missing_steps.clone()
                } else {
                    steps
                };
                (
                    UiState::Results {
                        steps,
                        encouragement,
                    },
                    SubmitOutcome::Rendered,
                )
            }
            DecomposeBody::Error(message) => (UiState::Error(message), SubmitOutcome::ServiceError),
            DecomposeBody::Unrecognized => {
                tracing::warn!(?response, "decompose: unexpected response format");
                (
                    UiState::Error(messages.unexpected_format.clone()),
                    SubmitOutcome::MalformedResponse,
                )
            }
        },
        Err(DecomposeError::Status {
            status,
            reason,
            message,
        }) => match ErrorCode::from_status(status) {
            ErrorCode::Unauthorized => (
                UiState::LoginPrompt(messages.session_expired.clone()),
                SubmitOutcome::Unauthenticated,
            ),
            ErrorCode::Internal => (
                UiState::Error(messages.server_issue.clone()),
                SubmitOutcome::ServerError,
            ),
            ErrorCode::Http => {
                let text = message.unwrap_or_else(|| messages.http_status(status, &reason));
                (UiState::Error(text), SubmitOutcome::HttpError)
            }
        },
        Err(err) => {
            tracing::error!(%err, "decompose: request failed");
            (
                UiState::Error(messages.request_failed(&err.to_string())),
                SubmitOutcome::TransportError,
            )
        }
    }
}
