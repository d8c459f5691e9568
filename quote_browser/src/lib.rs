//! Quote browser — fetches quotes from a remote API, shows a random sample, pages
//! through the rest on demand and keeps a persistent list of favorites.
//!
//! Modules:
//! - `source` — `QuoteSource` trait and the HTTP implementation.
//! - `session` — `QuoteSession`, the displayed subset and "load more".
//! - `favorites` — `FavoritesStore`, favorite ids mirrored to storage.
//! - `storage` — `KeyValueStorage` with in-memory and file backends.
//! - `presenter` — `Presenter` trait, entrance animation and console output.
//! - `search` — case-insensitive quote filtering.
//! - `command` — commands of the interactive terminal loop.
//! - `config` — runtime settings.
#![warn(missing_docs)]
pub mod command;
pub mod config;
pub mod favorites;
pub mod presenter;
pub mod search;
pub mod session;
pub mod source;
pub mod storage;

pub use config::Config;
pub use favorites::FavoritesStore;
pub use session::QuoteSession;
