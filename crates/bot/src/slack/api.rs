//! The outbound Slack operations the bot depends on.

use async_trait::async_trait;

use super::error::SlackError;
use super::types::Block;

/// Outbound messaging used by the route handlers.
///
/// [`SlackClient`](super::SlackClient) implements this against the Slack Web
/// API; tests substitute a recording fake.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Post a new message to a channel.
    async fn post_message(
        &self,
        channel: &str,
        blocks: Vec<Block>,
        fallback_text: Option<&str>,
    ) -> Result<(), SlackError>;

    /// Replace the message an interaction came from, via its `response_url`.
    async fn replace_original(
        &self,
        response_url: &str,
        blocks: Vec<Block>,
        fallback_text: Option<&str>,
    ) -> Result<(), SlackError>;
}
