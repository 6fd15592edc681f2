//! Domain layer for the zatlas plugin.
//!
//! Core types independent of Zellij APIs: the country record as served by the
//! external API, name collation, and the crate-wide error type.
//!
//! # Organization
//!
//! - [`country`]: Country record and display helpers
//! - [`collation`]: Folded name keys for alphabetical ordering
//! - [`error`]: Error types and result aliases

pub mod collation;
pub mod country;
pub mod error;

pub use country::{Country, CountryName, Currency, Flags};
pub use error::{AtlasError, Result};
