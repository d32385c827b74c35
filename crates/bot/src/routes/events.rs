//! Slack Events API webhook.
//!
//! Answers the URL verification handshake and starts an order when the bot is
//! mentioned with `buy`.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use drink_order_core::{MentionCommand, OrderFlow};
use tracing::{debug, info, instrument};

use super::verify_request;
use crate::error::AppError;
use crate::slack::{
    AppMentionEvent, CallbackEvent, EventEnvelope, build_drink_menu, build_shop_menu,
    fallback_text,
};
use crate::state::AppState;

/// Create the events webhook route.
pub fn router() -> Router<AppState> {
    Router::new().route("/slack/events", post(handle_event))
}

/// Handle an Events API delivery.
#[instrument(skip_all)]
async fn handle_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    verify_request(&state, &headers, &body)?;

    let envelope: EventEnvelope = serde_json::from_slice(&body)?;

    match envelope {
        EventEnvelope::UrlVerification { challenge } => {
            debug!("Answering URL verification");
            Ok(([(header::CONTENT_TYPE, "text/plain")], challenge).into_response())
        }
        EventEnvelope::EventCallback {
            event: CallbackEvent::AppMention(mention),
        } => {
            handle_mention(&state, &mention).await?;
            Ok(StatusCode::OK.into_response())
        }
        EventEnvelope::EventCallback {
            event: CallbackEvent::Other,
        }
        | EventEnvelope::Other => {
            debug!("Ignoring event");
            Ok(StatusCode::OK.into_response())
        }
    }
}

/// Start an order from an `app_mention`.
///
/// Posts the first prompt of the configured flow to the mention's channel.
#[instrument(skip(state, mention), fields(channel = %mention.channel, user = ?mention.user))]
async fn handle_mention(state: &AppState, mention: &AppMentionEvent) -> Result<(), AppError> {
    let flow = state.flow();
    let command = MentionCommand::parse(&mention.text, flow.min_tokens())?;

    if !command.is_buy() {
        debug!(command = %command.name(), "Ignoring unknown command");
        return Ok(());
    }

    let blocks = match flow {
        OrderFlow::Catalog => {
            let shop = command.joined_args();
            let drinks = state
                .catalog()
                .drinks_for(&shop)
                .ok_or_else(|| AppError::Validation(format!("unknown shop: {shop}")))?;

            info!(%shop, "Offering drink menu");
            build_drink_menu(Some(&shop), drinks)
        }
        OrderFlow::ShopMenu => {
            info!("Offering shop menu");
            build_shop_menu(&state.catalog().shop_menu.shops)
        }
    };

    let text = fallback_text(&blocks).map(str::to_owned);
    state
        .slack()
        .post_message(&mention.channel, blocks, text.as_deref())
        .await?;

    Ok(())
}
