//! Mention command parsing.
//!
//! A mention looks like `<@U012BOT> buy Starbucks`: the first token is the
//! bot mention itself, the second the command, the rest its arguments.

/// The only command the bot acts on.
pub const BUY: &str = "buy";

/// Errors that can occur when parsing a [`MentionCommand`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The mention had fewer tokens than the active flow needs.
    #[error("mention needs at least {required} tokens (got {got})")]
    TooFewTokens {
        /// Minimum number of tokens, counting the mention itself.
        required: usize,
        /// Number of tokens present.
        got: usize,
    },
}

/// A command addressed to the bot.
///
/// # Examples
///
/// ```
/// use drink_order_core::MentionCommand;
///
/// let cmd = MentionCommand::parse("<@U1> buy Starbucks", 3).unwrap();
/// assert!(cmd.is_buy());
/// assert_eq!(cmd.args(), ["Starbucks"]);
///
/// assert!(MentionCommand::parse("<@U1>", 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionCommand {
    name: String,
    args: Vec<String>,
}

impl MentionCommand {
    /// Parse mention text, requiring at least `min_tokens` whitespace
    /// separated tokens (the mention included).
    ///
    /// At least two tokens are always required, since a bare mention has no
    /// command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::TooFewTokens`] if the text is too short.
    pub fn parse(text: &str, min_tokens: usize) -> Result<Self, CommandError> {
        let required = min_tokens.max(2);
        let tokens: Vec<&str> = text.split_whitespace().collect();

        if tokens.len() < required {
            return Err(CommandError::TooFewTokens {
                required,
                got: tokens.len(),
            });
        }

        let mut rest = tokens.into_iter().skip(1);
        let name = rest.next().unwrap_or_default().to_owned();
        let args = rest.map(str::to_owned).collect();

        Ok(Self { name, args })
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments following the command.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the arguments joined by single spaces.
    #[must_use]
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }

    /// Whether this is the `buy` command.
    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.name == BUY
    }
}
