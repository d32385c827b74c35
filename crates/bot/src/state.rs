//! Application state shared across handlers.

use std::sync::Arc;

use drink_order_core::{DrinkCatalog, OrderFlow};
use secrecy::SecretString;

use crate::config::BotConfig;
use crate::slack::{SigningSecret, SlackApi, SlackClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything in it is read-only
/// after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    slack: Arc<dyn SlackApi>,
    catalog: DrinkCatalog,
    flow: OrderFlow,
    signing_secret: Option<SigningSecret>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `slack` - Outbound Slack messaging
    /// * `catalog` - Shops and drinks offered in the menus
    /// * `flow` - Which conversation `buy` starts
    /// * `signing_secret` - Enables request signature verification when set
    #[must_use]
    pub fn new(
        slack: Arc<dyn SlackApi>,
        catalog: DrinkCatalog,
        flow: OrderFlow,
        signing_secret: Option<SecretString>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                slack,
                catalog,
                flow,
                signing_secret: signing_secret.map(SigningSecret::new),
            }),
        }
    }

    /// Build the state for a configured bot, talking to the real Slack API.
    #[must_use]
    pub fn from_config(config: &BotConfig) -> Self {
        let slack = SlackClient::new(config.slack.bot_token.clone());

        Self::new(
            Arc::new(slack),
            config.catalog.clone(),
            config.flow,
            config.slack.signing_secret.clone(),
        )
    }

    /// Get the outbound Slack client.
    #[must_use]
    pub fn slack(&self) -> &dyn SlackApi {
        self.inner.slack.as_ref()
    }

    /// Get the drink catalog.
    #[must_use]
    pub fn catalog(&self) -> &DrinkCatalog {
        &self.inner.catalog
    }

    /// Get the configured order flow.
    #[must_use]
    pub fn flow(&self) -> OrderFlow {
        self.inner.flow
    }

    /// Get the signing secret, if request verification is enabled.
    #[must_use]
    pub fn signing_secret(&self) -> Option<&SigningSecret> {
        self.inner.signing_secret.as_ref()
    }
}
