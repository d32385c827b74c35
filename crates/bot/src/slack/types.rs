//! Slack Block Kit and webhook payload types.
//!
//! These types represent the subset of Slack's Block Kit, Events API and
//! interactivity schemas needed for the drink order conversation.
//!
//! See: <https://api.slack.com/block-kit>

use serde::{Deserialize, Serialize};

/// A Slack message with blocks, posted with `chat.postMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    /// Channel ID to post to.
    pub channel: String,
    /// Message blocks.
    pub blocks: Vec<Block>,
    /// Optional plain text fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A message sent to an interaction's `response_url`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMessage {
    /// Message blocks.
    pub blocks: Vec<Block>,
    /// Whether to replace the message the interaction came from.
    pub replace_original: bool,
    /// Optional plain text fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Block Kit block types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section block with text.
    Section { text: Text },
    /// Actions block with interactive elements.
    Actions {
        /// Identifier echoed back with interactions on this block.
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
        elements: Vec<ActionElement>,
    },
}

impl Block {
    /// Returns the block identifier, if any.
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Self::Actions { block_id, .. } => block_id.as_deref(),
            Self::Section { .. } => None,
        }
    }
}

/// Text object types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Plain text (no formatting).
    PlainText { text: String, emoji: bool },
    /// Markdown text (supports formatting).
    Mrkdwn { text: String },
}

impl Text {
    /// Create a plain text object.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: false,
        }
    }

    /// Create a markdown text object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    /// Returns the raw text content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlainText { text, .. } | Self::Mrkdwn { text } => text,
        }
    }
}

/// Plain text object (for button labels, placeholders and options).
#[derive(Debug, Clone, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    pub text_type: &'static str,
    pub text: String,
    pub emoji: bool,
}

impl PlainText {
    /// Create a new plain text object.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: false,
        }
    }
}

/// An entry in a select menu.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    /// Label shown to the user.
    pub text: PlainText,
    /// Value sent back when the option is picked.
    pub value: String,
}

impl SelectOption {
    /// Create an option whose label and value are the same string.
    #[must_use]
    pub fn labelled(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            text: PlainText::new(value.clone()),
            value,
        }
    }
}

/// Action block elements.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionElement {
    /// Interactive button.
    Button {
        text: PlainText,
        action_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ButtonStyle>,
    },
    /// Single-select menu with a fixed list of options.
    StaticSelect {
        placeholder: PlainText,
        action_id: String,
        options: Vec<SelectOption>,
    },
}

impl ActionElement {
    /// Returns the element's action identifier.
    #[must_use]
    pub fn action_id(&self) -> &str {
        match self {
            Self::Button { action_id, .. } | Self::StaticSelect { action_id, .. } => action_id,
        }
    }
}

/// Button style (affects color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Green primary button.
    Primary,
    /// Red danger button.
    Danger,
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from posting a message.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Channel ID where message was posted.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp (unique ID).
    #[serde(default)]
    pub ts: Option<String>,
    /// Error message if not ok.
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Events API
// =============================================================================

/// Envelope delivered to the events endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    /// Handshake sent when the events URL is configured.
    UrlVerification {
        /// Token to echo back.
        challenge: String,
    },
    /// A subscribed event.
    EventCallback {
        /// The wrapped event.
        event: CallbackEvent,
    },
    /// Any other envelope type.
    #[serde(other)]
    Other,
}

/// Inner event of an `event_callback` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallbackEvent {
    /// The bot was mentioned in a channel.
    AppMention(AppMentionEvent),
    /// Any other event type.
    #[serde(other)]
    Other,
}

/// An `app_mention` event.
#[derive(Debug, Clone, Deserialize)]
pub struct AppMentionEvent {
    /// Channel the mention was posted in.
    pub channel: String,
    /// User who mentioned the bot.
    #[serde(default)]
    pub user: Option<String>,
    /// Message text, starting with the mention.
    #[serde(default)]
    pub text: String,
    /// Message timestamp.
    #[serde(default)]
    pub ts: Option<String>,
}

// =============================================================================
// Interactivity
// =============================================================================

/// Slack interaction payload, posted as the `payload` form field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionPayload {
    /// A user activated a control in a message block.
    BlockActions(BlockActionsPayload),
    /// Any other interaction type.
    #[serde(other)]
    Other,
}

/// A `block_actions` interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockActionsPayload {
    /// User who triggered the interaction.
    #[serde(default)]
    pub user: Option<InteractionUser>,
    /// Channel where interaction occurred.
    #[serde(default)]
    pub channel: Option<InteractionChannel>,
    /// Actions that were triggered.
    #[serde(default)]
    pub actions: Vec<InteractionAction>,
    /// Response URL for replacing the message.
    #[serde(default)]
    pub response_url: Option<String>,
}

/// User who triggered an interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionUser {
    /// Slack user ID.
    pub id: String,
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
}

/// Channel where interaction occurred.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionChannel {
    /// Channel ID.
    pub id: String,
}

/// Action that was triggered.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionAction {
    /// Action ID (set when creating the element).
    pub action_id: String,
    /// Block ID containing this action.
    #[serde(default)]
    pub block_id: Option<String>,
    /// Value attached to a button.
    #[serde(default)]
    pub value: Option<String>,
    /// Option picked in a select menu.
    #[serde(default)]
    pub selected_option: Option<SelectedOption>,
    /// Action type.
    #[serde(rename = "type", default)]
    pub action_type: Option<String>,
}

/// Option picked in a select menu.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOption {
    /// Value of the picked option.
    pub value: String,
}
