//! Slack interactivity webhook.
//!
//! Advances an order by one step per interaction. The step is read back from
//! the `block_id` of the control the user activated, and the next prompt
//! replaces the message it came from.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use drink_order_core::{DrinkCatalog, StepToken};
use tracing::{debug, info, instrument};

use super::verify_request;
use crate::error::AppError;
use crate::slack::{
    Block, BlockActionsPayload, CANCEL_ACTION, InteractionAction, InteractionPayload, OK_ACTION,
    build_confirmation_message, build_drink_menu, fallback_text,
};
use crate::state::AppState;

/// Form field carrying the interaction JSON.
const PAYLOAD_FIELD: &str = "payload";

/// Create the interactivity webhook route.
pub fn router() -> Router<AppState> {
    Router::new().route("/slack/actions", post(handle_action))
}

/// Handle an interaction callback.
#[instrument(skip_all)]
async fn handle_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    verify_request(&state, &headers, &body)?;

    let payload = extract_payload(&body)?;
    let interaction: InteractionPayload = serde_json::from_str(&payload)?;

    match interaction {
        InteractionPayload::BlockActions(payload) => handle_block_actions(&state, payload).await?,
        InteractionPayload::Other => debug!("Ignoring interaction"),
    }

    Ok(StatusCode::OK)
}

/// Replace the originating message with the next prompt, if there is one.
#[instrument(
    skip(state, payload),
    fields(
        user = ?payload.user.as_ref().map(|u| u.id.as_str()),
        channel = ?payload.channel.as_ref().map(|c| c.id.as_str()),
    )
)]
async fn handle_block_actions(
    state: &AppState,
    payload: BlockActionsPayload,
) -> Result<(), AppError> {
    let action = payload
        .actions
        .first()
        .ok_or_else(|| AppError::Validation("No actions in payload".into()))?;

    let Some(blocks) = next_prompt(state.catalog(), action)? else {
        return Ok(());
    };

    let response_url = payload
        .response_url
        .as_deref()
        .ok_or_else(|| AppError::Validation("Missing response_url".into()))?;

    let text = fallback_text(&blocks).map(str::to_owned);
    state
        .slack()
        .replace_original(response_url, blocks, text.as_deref())
        .await?;

    Ok(())
}

/// Work out the prompt that follows `action`.
///
/// Returns `None` for the confirm and cancel buttons, which end the
/// conversation without a new message.
fn next_prompt(
    catalog: &DrinkCatalog,
    action: &InteractionAction,
) -> Result<Option<Vec<Block>>, AppError> {
    let block_id = action
        .block_id
        .as_deref()
        .ok_or_else(|| AppError::Validation("Action has no block_id".into()))?;
    let step: StepToken = block_id.parse()?;

    debug!(step = %step, action_id = %action.action_id, "Advancing order");

    match step {
        StepToken::SelectShop => {
            let shop = selected_value(action)?;
            Ok(Some(build_drink_menu(Some(shop), &catalog.shop_menu.drinks)))
        }
        StepToken::SelectDrink { shop } => {
            let drink = selected_value(action)?;
            Ok(Some(build_confirmation_message(drink, shop.as_deref())))
        }
        StepToken::ConfirmToBuy => match action.action_id.as_str() {
            OK_ACTION => {
                info!(drink = ?action.value, "Order confirmed");
                Ok(None)
            }
            CANCEL_ACTION => {
                info!("Order cancelled");
                Ok(None)
            }
            other => Err(AppError::Validation(format!("Unknown action: {other}"))),
        },
    }
}

fn selected_value(action: &InteractionAction) -> Result<&str, AppError> {
    action
        .selected_option
        .as_ref()
        .map(|option| option.value.as_str())
        .ok_or_else(|| AppError::Validation("Select action has no selected_option".into()))
}

/// Pull the `payload` field out of a form-encoded body.
fn extract_payload(body: &[u8]) -> Result<String, AppError> {
    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == PAYLOAD_FIELD)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| AppError::Decode("Missing payload field".into()))
}
