//!
//! Common types and utilities shared by the quote browser crates.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record, the de-duplicated `QuoteList` and the API envelope.
//! - `net` — remote API constants and URL helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::{Quote, QuoteId, QuoteList};
pub use result::Result;
