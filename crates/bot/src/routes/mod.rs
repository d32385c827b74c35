//! HTTP route handlers for the bot.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Health check
//! POST /slack/events    - Events API (URL verification, app mentions)
//! POST /slack/actions   - Interactivity (select menus, buttons)
//! ```

mod actions;
mod events;

use axum::{Router, http::HeaderMap, routing::get};

use crate::error::AppError;
use crate::slack::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::state::AppState;

/// Build the complete router for the bot.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(events::router())
        .merge(actions::router())
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// Check the Slack signature of a request body.
///
/// A no-op when no signing secret is configured.
fn verify_request(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<(), AppError> {
    let Some(secret) = state.signing_secret() else {
        return Ok(());
    };

    let timestamp = headers
        .get(TIMESTAMP_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing timestamp header".into()))?;

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing signature header".into()))?;

    secret
        .verify(timestamp, body, signature)
        .map_err(|e| AppError::Unauthorized(e.to_string()))
}
