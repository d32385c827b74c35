//! Core types for the drink order bot.
//!
//! This module provides the domain types shared by the bot and its tests.

pub mod catalog;
pub mod command;
pub mod flow;
pub mod step;

pub use catalog::{CatalogError, DrinkCatalog, Shop, ShopMenu};
pub use command::{CommandError, MentionCommand};
pub use flow::OrderFlow;
pub use step::{StepToken, StepTokenError};
