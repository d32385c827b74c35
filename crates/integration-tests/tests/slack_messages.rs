//! Integration tests for the drink order Block Kit messages.
//!
//! These tests check the serialized JSON Slack receives, which is what
//! determines the identifiers echoed back with each interaction.

use serde_json::Value;

use drink_order_bot::slack::{
    Block, build_confirmation_message, build_drink_menu, build_shop_menu,
};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_string()).collect()
}

fn to_json(blocks: &[Block]) -> Value {
    serde_json::to_value(blocks).unwrap()
}

// =============================================================================
// Select Menus
// =============================================================================

#[test]
fn test_drink_menu_json_shape() {
    let json = to_json(&build_drink_menu(
        Some("Starbucks"),
        &names(&["Caramel Frappucino", "White Chocolate Mocha"]),
    ));

    assert_eq!(json[0]["type"], "section");
    assert_eq!(json[0]["text"]["type"], "plain_text");
    assert_eq!(json[0]["text"]["text"], "What do you need?");

    assert_eq!(json[1]["type"], "actions");
    assert_eq!(json[1]["block_id"], "select-drink=Starbucks");

    let select = &json[1]["elements"][0];
    assert_eq!(select["type"], "static_select");
    assert_eq!(select["action_id"], "select-drink");
    assert_eq!(select["placeholder"]["text"], "Drink");
    assert_eq!(select["options"][0]["text"]["text"], "Caramel Frappucino");
    assert_eq!(select["options"][1]["value"], "White Chocolate Mocha");
}

#[test]
fn test_shop_menu_json_shape() {
    let json = to_json(&build_shop_menu(&names(&["Starbucks", "Veloce", "Doutor"])));

    assert_eq!(json[0]["text"]["text"], "Which shop?");
    assert_eq!(json[1]["block_id"], "select-shop");

    let options = json[1]["elements"][0]["options"].as_array().unwrap();
    let values: Vec<&str> = options.iter().filter_map(|o| o["value"].as_str()).collect();
    assert_eq!(values, ["Starbucks", "Veloce", "Doutor"]);
}

#[test]
fn test_shop_with_separator_survives_in_block_id() {
    let json = to_json(&build_drink_menu(Some("A=B Cafe"), &names(&["Tea"])));
    assert_eq!(json[1]["block_id"], "select-drink=A=B Cafe");
}

// =============================================================================
// Confirmation
// =============================================================================

#[test]
fn test_confirmation_json_shape() {
    let json = to_json(&build_confirmation_message("Latte", Some("Veloce")));

    assert_eq!(json[0]["text"]["type"], "mrkdwn");
    assert_eq!(json[0]["text"]["text"], "Can I buy `Latte` from `Veloce` ?");

    assert_eq!(json[1]["block_id"], "confirm-to-buy");

    let ok = &json[1]["elements"][0];
    assert_eq!(ok["type"], "button");
    assert_eq!(ok["action_id"], "ok");
    assert_eq!(ok["text"]["text"], "Ok");
    assert_eq!(ok["value"], "Latte");
    assert_eq!(ok["style"], "primary");

    let cancel = &json[1]["elements"][1];
    assert_eq!(cancel["action_id"], "cancel");
    assert_eq!(cancel["text"]["text"], "Cancel");
    assert_eq!(cancel["style"], "danger");
}

#[test]
fn test_blocks_without_id_omit_field() {
    let json = to_json(&build_confirmation_message("Latte", None));
    assert!(json[0].get("block_id").is_none());
}
