//! Embedded message catalogs.
//!
//! Built-in catalogs are embedded at compile time using `include_str!()`.
//! Every message code used by the built-in validators has an entry in each
//! catalog.

use crate::catalog::MessageCatalog;
use crate::error::Result;

/// English messages.
pub const EN_MESSAGES: &str = include_str!("../data/messages/en.toml");

/// Spanish messages.
pub const ES_MESSAGES: &str = include_str!("../data/messages/es.toml");

/// Parse all embedded catalogs.
pub fn catalogs() -> Result<Vec<MessageCatalog>> {
    Ok(vec![
        MessageCatalog::from_toml_str(EN_MESSAGES, "embedded en.toml")?,
        MessageCatalog::from_toml_str(ES_MESSAGES, "embedded es.toml")?,
    ])
}
