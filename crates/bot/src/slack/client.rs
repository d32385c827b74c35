//! Slack Web API client.
//!
//! Provides methods for posting messages and replacing interactive messages
//! through their `response_url`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};

use super::api::SlackApi;
use super::error::SlackError;
use super::types::{Block, PostMessageResponse, ResponseMessage, SlackMessage};

/// Slack Web API base URL.
const SLACK_API_BASE: &str = "https://slack.com/api";

/// Slack API client for sending messages.
#[derive(Clone)]
pub struct SlackClient {
    /// HTTP client.
    client: Client,
    /// Bot token for authentication.
    bot_token: SecretString,
    /// Web API base URL.
    api_base: String,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("bot_token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    /// Create a new Slack client.
    #[must_use]
    pub fn new(bot_token: SecretString) -> Self {
        Self::with_api_base(bot_token, SLACK_API_BASE)
    }

    /// Create a Slack client that talks to a different Web API host.
    #[must_use]
    pub fn with_api_base(bot_token: SecretString, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            bot_token,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Post a message to a channel.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Slack returns an error.
    #[instrument(skip(self, blocks), fields(channel = %channel))]
    pub async fn post_blocks(
        &self,
        channel: &str,
        blocks: Vec<Block>,
        fallback_text: Option<&str>,
    ) -> Result<PostMessageResponse, SlackError> {
        let message = SlackMessage {
            channel: channel.to_string(),
            blocks,
            text: fallback_text.map(String::from),
        };

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.api_base))
            .bearer_auth(self.bot_token.expose_secret())
            .json(&message)
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        let result: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| SlackError::Response(e.to_string()))?;

        if !result.ok {
            error!(
                error = ?result.error,
                "Slack API error posting message"
            );
            return Err(SlackError::Api(
                result.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        debug!(
            ts = ?result.ts,
            channel = ?result.channel,
            "Message posted to Slack"
        );

        Ok(result)
    }

    /// Respond to a `response_url` (for interaction responses).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, response_url, blocks))]
    pub async fn respond_to_url(
        &self,
        response_url: &str,
        blocks: Vec<Block>,
        replace_original: bool,
        fallback_text: Option<&str>,
    ) -> Result<(), SlackError> {
        let message = ResponseMessage {
            blocks,
            replace_original,
            text: fallback_text.map(String::from),
        };

        let response = self
            .client
            .post(response_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Slack response_url rejected message");
            return Err(SlackError::Response(format!(
                "Response URL returned {status}: {body}"
            )));
        }

        debug!("Responded to Slack response_url");

        Ok(())
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn post_message(
        &self,
        channel: &str,
        blocks: Vec<Block>,
        fallback_text: Option<&str>,
    ) -> Result<(), SlackError> {
        self.post_blocks(channel, blocks, fallback_text)
            .await
            .map(|_| ())
    }

    async fn replace_original(
        &self,
        response_url: &str,
        blocks: Vec<Block>,
        fallback_text: Option<&str>,
    ) -> Result<(), SlackError> {
        self.respond_to_url(response_url, blocks, true, fallback_text)
            .await
    }
}
