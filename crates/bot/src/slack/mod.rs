//! Slack integration for the drink order conversation.
//!
//! This module provides:
//! - [`SlackApi`], the outbound operations handlers depend on
//! - [`SlackClient`], its Web API implementation
//! - Block Kit and webhook payload types
//! - Message builders for each conversation step
//! - Opt-in webhook signature verification
//!
//! # Flow
//!
//! 1. A user mentions the bot with `buy`; a shop or drink menu is posted
//! 2. The user picks an option; the menu is replaced by the next prompt
//! 3. The user clicks Ok or Cancel on the confirmation prompt

mod api;
mod client;
mod error;
mod messages;
mod signature;
mod types;

pub use api::SlackApi;
pub use client::SlackClient;
pub use error::SlackError;
pub use messages::{
    CANCEL_ACTION, OK_ACTION, build_confirmation_message, build_drink_menu, build_shop_menu,
    fallback_text,
};
pub use signature::{SIGNATURE_HEADER, SigningSecret, TIMESTAMP_HEADER};
pub use types::{
    ActionElement, AppMentionEvent, Block, BlockActionsPayload, ButtonStyle, CallbackEvent,
    EventEnvelope, InteractionAction, InteractionChannel, InteractionPayload, InteractionUser,
    PlainText, PostMessageResponse, SelectOption, SelectedOption, Text,
};
