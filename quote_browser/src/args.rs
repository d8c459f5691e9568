//! Command-line arguments for the quote browser.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::Parser;
use quote_browser::Config;
use quote_browser::config::DEFAULT_STORAGE_FILE;
use quote_common::net::{API_BASE_URL, DEFAULT_LIMIT};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quotes API.
    #[clap(long, default_value = API_BASE_URL)]
    pub api_url: String,

    /// Number of quotes to fetch (at least 1).
    #[clap(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Path of the JSON file favorites are stored in.
    #[clap(long, default_value = DEFAULT_STORAGE_FILE)]
    pub storage: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            api_url: args.api_url.trim().to_string(),
            limit: args.limit,
            storage_path: normalize_path(&args.storage),
        }
    }
}

/// Storage path from `--storage`, with surrounding blanks and one pair of literal
/// double quotes removed (as left behind by some launchers and `.env` files).
fn normalize_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    match raw.strip_prefix('"').and_then(|inner| inner.strip_suffix('"')) {
        Some(inner) => PathBuf::from(inner.trim()),
        None => PathBuf::from(raw),
    }
}
