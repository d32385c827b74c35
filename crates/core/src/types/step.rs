//! Conversation step tokens.
//!
//! The bot keeps no state between requests. Instead, every prompt it sends
//! carries a [`StepToken`] in the `block_id` of its interactive block, and
//! Slack echoes that identifier back with the user's interaction. The token
//! tells the interaction handler which prompt produced the click and, for the
//! drink menu, which shop the drinks belong to.

use core::fmt;
use core::str::FromStr;

/// Separator between a step name and its embedded shop name.
pub const STEP_SEPARATOR: char = '=';

/// Step name of the shop selection menu.
pub const SELECT_SHOP: &str = "select-shop";

/// Step name of the drink selection menu.
pub const SELECT_DRINK: &str = "select-drink";

/// Step name of the confirm/cancel prompt.
pub const CONFIRM_TO_BUY: &str = "confirm-to-buy";

/// Errors that can occur when decoding a [`StepToken`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StepTokenError {
    /// The identifier is empty.
    #[error("step identifier cannot be empty")]
    Empty,
    /// The step name is not one the bot ever emits.
    #[error("unknown step: {0}")]
    UnknownStep(String),
    /// A step that never carries a shop had one attached.
    #[error("step {0} does not take a shop")]
    UnexpectedShop(String),
}

/// The prompt a user is currently answering.
///
/// Encoded as `select-shop`, `select-drink`, `select-drink=<shop>` or
/// `confirm-to-buy`. Decoding splits on the first [`STEP_SEPARATOR`] only,
/// so shop names containing the separator survive a round trip.
///
/// # Examples
///
/// ```
/// use drink_order_core::StepToken;
///
/// let token = StepToken::select_drink("Veloce");
/// assert_eq!(token.to_string(), "select-drink=Veloce");
///
/// let decoded: StepToken = "select-drink=Veloce".parse().unwrap();
/// assert_eq!(decoded, token);
/// assert_eq!(decoded.shop(), Some("Veloce"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepToken {
    /// The shop menu is showing.
    SelectShop,
    /// The drink menu is showing, optionally for a known shop.
    SelectDrink {
        /// Shop the drinks were listed for.
        shop: Option<String>,
    },
    /// The confirm/cancel prompt is showing.
    ConfirmToBuy,
}

impl StepToken {
    /// Drink menu token carrying the shop the drinks belong to.
    #[must_use]
    pub fn select_drink(shop: impl Into<String>) -> Self {
        Self::SelectDrink {
            shop: Some(shop.into()),
        }
    }

    /// Returns the bare step name without any embedded shop.
    #[must_use]
    pub const fn step_name(&self) -> &'static str {
        match self {
            Self::SelectShop => SELECT_SHOP,
            Self::SelectDrink { .. } => SELECT_DRINK,
            Self::ConfirmToBuy => CONFIRM_TO_BUY,
        }
    }

    /// Returns the shop embedded in the token, if any.
    #[must_use]
    pub fn shop(&self) -> Option<&str> {
        match self {
            Self::SelectDrink { shop } => shop.as_deref(),
            Self::SelectShop | Self::ConfirmToBuy => None,
        }
    }
}

impl fmt::Display for StepToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shop() {
            Some(shop) => write!(f, "{}{STEP_SEPARATOR}{shop}", self.step_name()),
            None => f.write_str(self.step_name()),
        }
    }
}

impl FromStr for StepToken {
    type Err = StepTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(StepTokenError::Empty);
        }

        let (step, shop) = match s.split_once(STEP_SEPARATOR) {
            Some((step, shop)) => (step, Some(shop)),
            None => (s, None),
        };

        match (step, shop) {
            (SELECT_DRINK, shop) => Ok(Self::SelectDrink {
                shop: shop.map(str::to_owned),
            }),
            (SELECT_SHOP, None) => Ok(Self::SelectShop),
            (CONFIRM_TO_BUY, None) => Ok(Self::ConfirmToBuy),
            (SELECT_SHOP | CONFIRM_TO_BUY, Some(_)) => {
                Err(StepTokenError::UnexpectedShop(step.to_owned()))
            }
            (other, _) => Err(StepTokenError::UnknownStep(other.to_owned())),
        }
    }
}
