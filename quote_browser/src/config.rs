//! Runtime configuration of the quote browser.
use std::path::PathBuf;

use quote_common::net::{API_BASE_URL, DEFAULT_LIMIT};

/// Default location of the key-value storage file.
pub const DEFAULT_STORAGE_FILE: &str = "quote_browser_storage.json";

/// Settings the binary wires the session and the favorites store with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the quotes API.
    pub api_url: String,
    /// Number of quotes fetched on load.
    pub limit: u32,
    /// File backing the favorites.
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
        }
    }
}
