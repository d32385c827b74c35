//! Shop catalog.
//!
//! The catalog is built once at startup (from the built-in defaults or a YAML
//! file) and is read-only afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Maximum length of an option label in a Slack static select.
pub const MAX_NAME_LENGTH: usize = 75;

/// Maximum number of options in a Slack static select.
pub const MAX_OPTIONS: usize = 100;

/// Errors that can occur when validating a [`DrinkCatalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A list that is shown as a menu has no entries.
    #[error("{0} cannot be empty")]
    EmptyList(String),
    /// A list that is shown as a menu has too many entries.
    #[error("{list} has {len} entries, at most {max} allowed")]
    TooManyEntries {
        /// Which list.
        list: String,
        /// Number of entries.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// A shop or drink name is blank.
    #[error("{0} contains a blank name")]
    BlankName(String),
    /// A shop or drink name is too long to be shown as an option.
    #[error("name {name:?} in {list} is longer than {max} characters")]
    NameTooLong {
        /// Which list.
        list: String,
        /// Offending name.
        name: String,
        /// Maximum allowed.
        max: usize,
    },
    /// The same shop appears twice.
    #[error("duplicate shop: {0}")]
    DuplicateShop(String),
    /// A shop name that a mention can never spell out, because mention
    /// arguments are rejoined with single spaces.
    #[error("shop name {0:?} has leading, trailing or repeated whitespace")]
    UntypeableShopName(String),
}

/// A shop and the drinks it sells, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop name as typed after `buy`.
    pub name: String,
    /// Drinks offered in the drink menu.
    pub drinks: Vec<String>,
}

impl Shop {
    /// Create a shop from a name and its drinks.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, drinks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            drinks: drinks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Fixed menus used by the shop menu flow.
///
/// The drink list is shared by every shop in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopMenu {
    /// Shops offered by a bare `buy`.
    pub shops: Vec<String>,
    /// Drinks offered once a shop is picked.
    pub drinks: Vec<String>,
}

impl Default for ShopMenu {
    fn default() -> Self {
        Self {
            shops: to_strings(&["Starbucks", "Veloce", "Doutor"]),
            drinks: to_strings(&["Blend Coffee", "Cafe Latte", "Iced Tea"]),
        }
    }
}

/// Everything the bot can offer.
///
/// # Examples
///
/// ```
/// use drink_order_core::DrinkCatalog;
///
/// let catalog = DrinkCatalog::default();
/// assert!(catalog.validate().is_ok());
///
/// let drinks = catalog.drinks_for("Veloce").unwrap();
/// assert_eq!(drinks, ["Blend Coffee", "Hot Chocolate", "Latte"]);
/// assert!(catalog.drinks_for("Foo").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkCatalog {
    /// Shops reachable with `buy <shop>`.
    pub shops: Vec<Shop>,
    /// Menus for the shop menu flow.
    #[serde(default)]
    pub shop_menu: ShopMenu,
}

impl Default for DrinkCatalog {
    fn default() -> Self {
        Self {
            shops: vec![
                Shop::new(
                    "Starbucks",
                    [
                        "Caramel Frappucino",
                        "Java Chip Frappuccino",
                        "White Chocolate Mocha",
                    ],
                ),
                Shop::new("Veloce", ["Blend Coffee", "Hot Chocolate", "Latte"]),
            ],
            shop_menu: ShopMenu::default(),
        }
    }
}

impl DrinkCatalog {
    /// Returns the drinks sold by `shop`, or `None` if the shop is unknown.
    ///
    /// Shop names are matched exactly.
    #[must_use]
    pub fn drinks_for(&self, shop: &str) -> Option<&[String]> {
        self.shops
            .iter()
            .find(|s| s.name == shop)
            .map(|s| s.drinks.as_slice())
    }

    /// Check that every list can be rendered as a Slack static select.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let shop_names: Vec<String> = self.shops.iter().map(|s| s.name.clone()).collect();
        validate_list("shops", &shop_names)?;

        let mut seen = HashSet::new();
        for shop in &self.shops {
            if !seen.insert(shop.name.as_str()) {
                return Err(CatalogError::DuplicateShop(shop.name.clone()));
            }
            if !is_normalized(&shop.name) {
                return Err(CatalogError::UntypeableShopName(shop.name.clone()));
            }
            validate_list(&format!("drinks of {}", shop.name), &shop.drinks)?;
        }

        validate_list("shop_menu.shops", &self.shop_menu.shops)?;
        validate_list("shop_menu.drinks", &self.shop_menu.drinks)?;

        Ok(())
    }
}

fn validate_list(list: &str, names: &[String]) -> Result<(), CatalogError> {
    if names.is_empty() {
        return Err(CatalogError::EmptyList(list.to_owned()));
    }

    if names.len() > MAX_OPTIONS {
        return Err(CatalogError::TooManyEntries {
            list: list.to_owned(),
            len: names.len(),
            max: MAX_OPTIONS,
        });
    }

    for name in names {
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName(list.to_owned()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(CatalogError::NameTooLong {
                list: list.to_owned(),
                name: name.clone(),
                max: MAX_NAME_LENGTH,
            });
        }
    }

    Ok(())
}

/// Whether `name` survives splitting on whitespace and rejoining with single
/// spaces unchanged.
fn is_normalized(name: &str) -> bool {
    name.split_whitespace().collect::<Vec<_>>().join(" ") == name
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|&n| n.to_owned()).collect()
}
