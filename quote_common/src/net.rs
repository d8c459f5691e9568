//! Remote quote API constants and URL helpers.

/// Base URL of the public quotes API.
pub const API_BASE_URL: &str = "https://dummyjson.com";
/// Path of the quotes listing endpoint, relative to the base URL.
pub const QUOTES_PATH: &str = "/quotes";
/// Number of quotes requested when the caller does not say otherwise.
pub const DEFAULT_LIMIT: u32 = 100;

/// Build the listing URL like "https://dummyjson.com/quotes?limit=100".
///
/// A trailing slash on `base` is ignored.
pub fn quotes_url(base: &str, limit: u32) -> String {
    format!("{}{}?limit={}", base.trim_end_matches('/'), QUOTES_PATH, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_url_default_base() {
        assert_eq!(
            quotes_url(API_BASE_URL, DEFAULT_LIMIT),
            "https://dummyjson.com/quotes?limit=100"
        );
    }

    #[test]
    fn test_quotes_url_trailing_slash() {
        assert_eq!(
            quotes_url("http://127.0.0.1:9000/", 5),
            "http://127.0.0.1:9000/quotes?limit=5"
        );
    }
}
