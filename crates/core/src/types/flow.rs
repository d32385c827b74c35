//! Order flow variants.

use serde::{Deserialize, Serialize};

/// How a `buy` mention starts the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderFlow {
    /// `buy <shop>`: the shop is named in the mention and looked up in the
    /// catalog, so the first prompt is the drink menu.
    #[default]
    Catalog,
    /// `buy`: the first prompt is a fixed shop menu, followed by a fixed
    /// drink menu.
    ShopMenu,
}

impl OrderFlow {
    /// Minimum number of mention tokens (mention, command, arguments) this
    /// flow needs before it can act.
    #[must_use]
    pub const fn min_tokens(self) -> usize {
        match self {
            Self::Catalog => 3,
            Self::ShopMenu => 2,
        }
    }
}

impl std::fmt::Display for OrderFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::ShopMenu => write!(f, "shop_menu"),
        }
    }
}

impl std::str::FromStr for OrderFlow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catalog" => Ok(Self::Catalog),
            "shop_menu" => Ok(Self::ShopMenu),
            _ => Err(format!("invalid order flow: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_min_tokens() {
        assert_eq!(OrderFlow::Catalog.min_tokens(), 3);
        assert_eq!(OrderFlow::ShopMenu.min_tokens(), 2);
    }

    #[test]
    fn test_parse_and_display() {
        for flow in [OrderFlow::Catalog, OrderFlow::ShopMenu] {
            assert_eq!(flow.to_string().parse::<OrderFlow>().unwrap(), flow);
        }
        assert!("menu".parse::<OrderFlow>().is_err());
    }

    #[test]
    fn test_default_is_catalog() {
        assert_eq!(OrderFlow::default(), OrderFlow::Catalog);
    }
}
