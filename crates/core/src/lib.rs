//! Drink Order Core - Shared types library.
//!
//! This crate provides the types used by the drink order bot:
//! - `bot` - Slack webhook server driving the order conversation
//! - `integration-tests` - Black-box tests of the bot's HTTP surface
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shop catalog, mention commands, order flows and the step
//!   tokens that carry conversation state through Slack

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
