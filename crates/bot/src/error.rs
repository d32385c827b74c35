//! Unified error handling for the bot's HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use drink_order_core::{CommandError, StepTokenError};
use thiserror::Error;

use crate::slack::SlackError;

/// Application-level error type for webhook handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body or payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request was well-formed but cannot be acted on.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Sending a message to Slack failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] SlackError),

    /// The request signature did not verify.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<StepTokenError> for AppError {
    fn from(err: StepTokenError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl AppError {
    /// HTTP status this error is answered with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Webhook request error"
            );
        } else {
            tracing::warn!(error = %self, "Webhook request rejected");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Decode(_) | Self::Upstream(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
