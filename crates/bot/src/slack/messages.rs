//! Slack message builders for the drink order conversation.
//!
//! Provides factory functions for building Block Kit messages for:
//! - The shop menu (shop menu flow)
//! - The drink menu
//! - The confirm/cancel prompt
//!
//! Every interactive block carries a [`StepToken`] as its `block_id` so the
//! interaction handler knows which prompt the user answered.

use drink_order_core::StepToken;

use super::types::{ActionElement, Block, ButtonStyle, PlainText, SelectOption, Text};

/// Action ID of the confirm button.
pub const OK_ACTION: &str = "ok";

/// Action ID of the cancel button.
pub const CANCEL_ACTION: &str = "cancel";

/// Build the shop selection menu.
#[must_use]
pub fn build_shop_menu(shops: &[String]) -> Vec<Block> {
    build_select_prompt("Which shop?", "Shop", &StepToken::SelectShop, shops)
}

/// Build the drink selection menu.
///
/// When `shop` is known it is embedded in the block identifier, so the
/// confirmation prompt can name it.
#[must_use]
pub fn build_drink_menu(shop: Option<&str>, drinks: &[String]) -> Vec<Block> {
    let token = StepToken::SelectDrink {
        shop: shop.map(str::to_owned),
    };
    build_select_prompt("What do you need?", "Drink", &token, drinks)
}

/// Build the confirm/cancel prompt for a drink.
///
/// The confirm button carries the drink as its value. An unknown shop renders
/// blank.
#[must_use]
pub fn build_confirmation_message(drink: &str, shop: Option<&str>) -> Vec<Block> {
    let shop = shop.unwrap_or_default();

    vec![
        Block::Section {
            text: Text::mrkdwn(format!("Can I buy `{drink}` from `{shop}` ?")),
        },
        Block::Actions {
            block_id: Some(StepToken::ConfirmToBuy.to_string()),
            elements: vec![
                ActionElement::Button {
                    text: PlainText::new("Ok"),
                    action_id: OK_ACTION.to_string(),
                    value: Some(drink.to_string()),
                    style: Some(ButtonStyle::Primary),
                },
                ActionElement::Button {
                    text: PlainText::new("Cancel"),
                    action_id: CANCEL_ACTION.to_string(),
                    value: Some(CANCEL_ACTION.to_string()),
                    style: Some(ButtonStyle::Danger),
                },
            ],
        },
    ]
}

/// Plain text fallback used for notifications.
#[must_use]
pub fn fallback_text(blocks: &[Block]) -> Option<&str> {
    blocks.iter().find_map(|block| match block {
        Block::Section { text } => Some(text.as_str()),
        Block::Actions { .. } => None,
    })
}

/// A question followed by a single select menu.
fn build_select_prompt(
    question: &str,
    placeholder: &str,
    token: &StepToken,
    choices: &[String],
) -> Vec<Block> {
    let options = choices.iter().map(SelectOption::labelled).collect();

    vec![
        Block::Section {
            text: Text::plain(question),
        },
        Block::Actions {
            block_id: Some(token.to_string()),
            elements: vec![ActionElement::StaticSelect {
                placeholder: PlainText::new(placeholder),
                action_id: token.step_name().to_string(),
                options,
            }],
        },
    ]
}
