//! Integration tests for the Events API webhook.

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::ServiceExt;

use drink_order_core::OrderFlow;
use drink_order_integration_tests::{RecordingSlack, Sent, TestBot, event_request, mention};

// =============================================================================
// URL Verification
// =============================================================================

#[tokio::test]
async fn test_url_verification_echoes_challenge() {
    let bot = TestBot::new(OrderFlow::Catalog);
    let envelope = json!({
        "token": "Jhj5dZrVaK7ZwHHjRyZWjbDl",
        "challenge": "abc123",
        "type": "url_verification"
    });

    let response = bot
        .router
        .clone()
        .oneshot(event_request(&envelope))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"abc123");
    assert!(bot.slack.sent().is_empty());
}

#[tokio::test]
async fn test_url_verification_is_idempotent() {
    let bot = TestBot::new(OrderFlow::ShopMenu);
    let envelope = json!({ "type": "url_verification", "challenge": "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P" });

    let first = bot.post_event(&envelope).await;
    let second = bot.post_event(&envelope).await;

    assert_eq!(first, second);
    assert_eq!(
        first.1,
        "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P"
    );
}

#[tokio::test]
async fn test_malformed_envelope_is_server_error() {
    let bot = TestBot::new(OrderFlow::Catalog);
    let request = Request::post("/slack/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = bot.send(request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal server error");
}

#[tokio::test]
async fn test_url_verification_without_challenge_is_server_error() {
    let bot = TestBot::new(OrderFlow::Catalog);
    let (status, _) = bot.post_event(&json!({ "type": "url_verification" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Catalog Flow
// =============================================================================

#[tokio::test]
async fn test_buy_known_shop_posts_drink_menu() {
    let bot = TestBot::new(OrderFlow::Catalog);

    let (status, body) = bot.post_event(&mention("<@U0LAN0Z89> buy Starbucks")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let sent = bot.slack.sent();
    assert_eq!(sent.len(), 1);

    let Some(Sent::Post { channel, blocks, text }) = sent.first() else {
        panic!("Expected a posted message");
    };
    assert_eq!(channel, "C0LAN2Q65");
    assert_eq!(text.as_deref(), Some("What do you need?"));
    assert_eq!(
        blocks.get(1).and_then(|b| b.block_id()),
        Some("select-drink=Starbucks")
    );

    let message = sent.first().unwrap();
    assert_eq!(
        message.option_values(),
        [
            "Caramel Frappucino",
            "Java Chip Frappuccino",
            "White Chocolate Mocha"
        ]
    );
    assert!(message.blocks_json().contains(r#""type":"static_select""#));
}

#[tokio::test]
async fn test_buy_unknown_shop_is_rejected_without_message() {
    let bot = TestBot::new(OrderFlow::Catalog);

    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89> buy Foo")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(bot.slack.sent().is_empty());
}

#[tokio::test]
async fn test_shop_name_is_joined_from_arguments() {
    let bot = TestBot::new(OrderFlow::Catalog);

    // "Star bucks" is not "Starbucks"
    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89> buy Star bucks")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Extra whitespace between tokens is not part of the name
    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89>   buy   Veloce ")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bot.slack.sent().len(), 1);
}

#[tokio::test]
async fn test_buy_without_shop_is_rejected_in_catalog_flow() {
    let bot = TestBot::new(OrderFlow::Catalog);

    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89> buy")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(bot.slack.sent().is_empty());
}

#[tokio::test]
async fn test_unknown_command_is_ignored() {
    let bot = TestBot::new(OrderFlow::Catalog);

    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89> sell Starbucks")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bot.slack.sent().is_empty());
}

#[tokio::test]
async fn test_send_failure_is_server_error() {
    let bot = TestBot::with_slack(OrderFlow::Catalog, RecordingSlack::failing(), None);

    let (status, body) = bot.post_event(&mention("<@U0LAN0Z89> buy Veloce")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal server error");
    assert_eq!(bot.slack.sent().len(), 1);
}

// =============================================================================
// Shop Menu Flow
// =============================================================================

#[tokio::test]
async fn test_buy_posts_shop_menu() {
    let bot = TestBot::new(OrderFlow::ShopMenu);

    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89> buy")).await;
    assert_eq!(status, StatusCode::OK);

    let sent = bot.slack.sent();
    assert_eq!(sent.len(), 1);

    let message = sent.first().unwrap();
    assert_eq!(
        message.blocks().get(1).and_then(|b| b.block_id()),
        Some("select-shop")
    );

    assert_eq!(message.option_values(), ["Starbucks", "Veloce", "Doutor"]);
}

#[tokio::test]
async fn test_shop_menu_ignores_extra_arguments() {
    let bot = TestBot::new(OrderFlow::ShopMenu);

    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89> buy Foo")).await;

    assert_eq!(status, StatusCode::OK);
    let sent = bot.slack.sent();
    assert_eq!(
        sent.first().and_then(|m| m.blocks().get(1)).and_then(|b| b.block_id()),
        Some("select-shop")
    );
}

#[tokio::test]
async fn test_bare_mention_is_rejected() {
    let bot = TestBot::new(OrderFlow::ShopMenu);

    let (status, _) = bot.post_event(&mention("<@U0LAN0Z89>")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(bot.slack.sent().is_empty());
}

// =============================================================================
// Ignored Deliveries
// =============================================================================

#[tokio::test]
async fn test_other_events_are_ignored() {
    let bot = TestBot::new(OrderFlow::Catalog);
    let envelope = json!({
        "type": "event_callback",
        "event": {
            "type": "reaction_added",
            "user": "U061F7AUR",
            "reaction": "coffee"
        }
    });

    let (status, _) = bot.post_event(&envelope).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bot.slack.sent().is_empty());
}

#[tokio::test]
async fn test_other_envelopes_are_ignored() {
    let bot = TestBot::new(OrderFlow::Catalog);

    let (status, _) = bot.post_event(&json!({ "type": "app_rate_limited" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bot.slack.sent().is_empty());
}

#[tokio::test]
async fn test_health() {
    let bot = TestBot::new(OrderFlow::Catalog);
    let request = Request::get("/health").body(Body::empty()).unwrap();

    let (status, body) = bot.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
