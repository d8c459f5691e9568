//! Fetching quotes from the remote API.
//!
//! `QuoteSource` is the seam the browsing session depends on; `HttpQuoteSource` is
//! the production implementation that issues a single `GET /quotes?limit=N` with
//! `reqwest`. There is no retry, no timeout and no paging of the remote call: one
//! request is expected to return the whole batch.
use async_trait::async_trait;
use log::{debug, info};
use quote_common::net::{API_BASE_URL, quotes_url};
use quote_common::quote::QuotesResponse;
use quote_common::{Quote, QuoteError, Result};
use reqwest::Client;

/// Anything able to produce a batch of quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch up to `limit` quotes.
    async fn fetch_all(&self, limit: u32) -> Result<Vec<Quote>>;
}

/// Quote source backed by the dummyjson HTTP API.
pub struct HttpQuoteSource {
    client: Client,
    base_url: String,
}

impl HttpQuoteSource {
    /// Source pointing at the public API.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Source pointing at another deployment of the same API.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Source using a preconfigured `reqwest` client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_all(&self, limit: u32) -> Result<Vec<Quote>> {
        let url = quotes_url(&self.base_url, limit);
        debug!("Quote request: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("Quote request to {} answered {}", url, status);
            return Err(QuoteError::FetchFailed);
        }

        let payload = response.json::<QuotesResponse>().await.map_err(|e| {
            if e.is_decode() {
                QuoteError::Decode(e.to_string())
            } else {
                QuoteError::Request(e)
            }
        })?;
        info!("Fetched {} quotes", payload.quotes.len());
        Ok(payload.quotes)
    }
}
