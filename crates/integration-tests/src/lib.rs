//! Integration tests for the drink order bot.
//!
//! The bot is driven in-process through its axum router. Outbound Slack calls
//! go to a [`RecordingSlack`] so tests can assert on exactly what would have
//! been sent, without network access.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p drink-order-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use drink_order_bot::{
    app,
    slack::{Block, SlackApi, SlackError},
    state::AppState,
};
use drink_order_core::{DrinkCatalog, OrderFlow};
use secrecy::SecretString;
use tower::ServiceExt;

/// A message the bot tried to send.
#[derive(Debug, Clone)]
pub enum Sent {
    /// `chat.postMessage` to a channel.
    Post {
        channel: String,
        blocks: Vec<Block>,
        text: Option<String>,
    },
    /// Replacement of an interactive message through its `response_url`.
    Replace {
        response_url: String,
        blocks: Vec<Block>,
        text: Option<String>,
    },
}

impl Sent {
    /// Blocks of the message, whichever way it was sent.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        match self {
            Self::Post { blocks, .. } | Self::Replace { blocks, .. } => blocks,
        }
    }

    /// Block Kit JSON of the message blocks.
    #[must_use]
    pub fn blocks_json(&self) -> String {
        serde_json::to_string(self.blocks()).unwrap()
    }

    /// Values of every option offered by the message's select menus, in
    /// display order.
    #[must_use]
    pub fn option_values(&self) -> Vec<String> {
        let json = serde_json::to_value(self.blocks()).unwrap();
        json.as_array()
            .into_iter()
            .flatten()
            .filter_map(|block| block["elements"].as_array())
            .flatten()
            .filter_map(|element| element["options"].as_array())
            .flatten()
            .filter_map(|option| option["value"].as_str())
            .map(str::to_owned)
            .collect()
    }
}

/// [`SlackApi`] fake that records every call.
#[derive(Debug, Default)]
pub struct RecordingSlack {
    sent: Mutex<Vec<Sent>>,
    fail: bool,
}

impl RecordingSlack {
    /// A fake whose calls all succeed.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A fake whose calls all fail as Slack rejecting the message.
    #[must_use]
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::default(),
            fail: true,
        })
    }

    /// Everything sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<Sent> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, sent: Sent) -> Result<(), SlackError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sent);

        if self.fail {
            Err(SlackError::Api("channel_not_found".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SlackApi for RecordingSlack {
    async fn post_message(
        &self,
        channel: &str,
        blocks: Vec<Block>,
        fallback_text: Option<&str>,
    ) -> Result<(), SlackError> {
        self.record(Sent::Post {
            channel: channel.to_string(),
            blocks,
            text: fallback_text.map(String::from),
        })
    }

    async fn replace_original(
        &self,
        response_url: &str,
        blocks: Vec<Block>,
        fallback_text: Option<&str>,
    ) -> Result<(), SlackError> {
        self.record(Sent::Replace {
            response_url: response_url.to_string(),
            blocks,
            text: fallback_text.map(String::from),
        })
    }
}

/// A bot router wired to a [`RecordingSlack`].
pub struct TestBot {
    pub slack: Arc<RecordingSlack>,
    pub router: Router,
}

impl TestBot {
    /// Bot running `flow` with the built-in catalog and no signature check.
    #[must_use]
    pub fn new(flow: OrderFlow) -> Self {
        Self::with_slack(flow, RecordingSlack::new(), None)
    }

    /// Bot with a specific fake and optional signing secret.
    #[must_use]
    pub fn with_slack(
        flow: OrderFlow,
        slack: Arc<RecordingSlack>,
        signing_secret: Option<&str>,
    ) -> Self {
        let state = AppState::new(
            slack.clone(),
            DrinkCatalog::default(),
            flow,
            signing_secret.map(|s| SecretString::from(s.to_string())),
        );

        Self {
            slack,
            router: app(state),
        }
    }

    /// Send a request and return its status and body text.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// POST a JSON event envelope to `/slack/events`.
    pub async fn post_event(&self, envelope: &serde_json::Value) -> (StatusCode, String) {
        self.send(event_request(envelope)).await
    }

    /// POST an interaction payload to `/slack/actions`.
    pub async fn post_action(&self, payload: &serde_json::Value) -> (StatusCode, String) {
        self.send(action_request(payload)).await
    }
}

/// Build an unsigned events request.
#[must_use]
pub fn event_request(envelope: &serde_json::Value) -> Request<Body> {
    Request::post("/slack/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(envelope.to_string()))
        .unwrap()
}

/// Build an unsigned interaction request.
#[must_use]
pub fn action_request(payload: &serde_json::Value) -> Request<Body> {
    Request::post("/slack/actions")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(payload)))
        .unwrap()
}

/// Form-encode an interaction payload the way Slack does.
#[must_use]
pub fn form_body(payload: &serde_json::Value) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("payload", &payload.to_string())
        .finish()
}

/// An `app_mention` event envelope.
#[must_use]
pub fn mention(text: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "event_callback",
        "team_id": "T012AB3C4",
        "event": {
            "type": "app_mention",
            "user": "U061F7AUR",
            "text": text,
            "ts": "1515449522.000016",
            "channel": "C0LAN2Q65",
            "event_ts": "1515449522000016"
        }
    })
}

/// A `block_actions` payload for a single action.
#[must_use]
pub fn block_action(action: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "type": "block_actions",
        "user": { "id": "U061F7AUR", "username": "barista" },
        "channel": { "id": "C0LAN2Q65" },
        "response_url": "https://hooks.slack.com/actions/T012AB3C4/1/abc",
        "actions": [action]
    })
}

/// A static select choice.
#[must_use]
pub fn select_action(block_id: &str, value: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "static_select",
        "action_id": block_id.split('=').next().unwrap(),
        "block_id": block_id,
        "selected_option": {
            "text": { "type": "plain_text", "text": value },
            "value": value
        }
    })
}

/// A button click.
#[must_use]
pub fn button_action(block_id: &str, action_id: &str, value: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "button",
        "action_id": action_id,
        "block_id": block_id,
        "value": value
    })
}
