//! Shared library for the wishlist Lambda functions.
//!
//! This crate provides configuration, the Notion client, and the adapter that
//! turns Notion pages into wish records.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod months;
pub mod notion;
pub mod secrets;
pub mod wishes;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{CreateWishRequest, DeleteResponse, DeleteWishRequest, ErrorResponse, UpdateWishRequest, WishRecord};
pub use months::{months_to_options, options_to_months};
pub use notion::NotionClient;
pub use secrets::resolve_api_key;
pub use wishes::{page_to_wish, NotionWishStore, PropertySchema, WishStore};
