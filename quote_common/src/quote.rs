//! Quote records and the list returned by one fetch.
//!
//! Quotes arrive from the remote API as JSON inside a `QuotesResponse` envelope and
//! are decoded with `serde_json`. A fetched batch is wrapped in a `QuoteList`, which
//! guarantees that every identifier appears at most once.
use std::collections::HashSet;
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

/// Identifier of a quote, unique within one fetch.
pub type QuoteId = u64;

/// A single quote with its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier assigned by the remote source.
    pub id: QuoteId,
    /// Quote text.
    pub quote: String,
    /// Person the quote is attributed to.
    pub author: String,
}

impl Quote {
    /// Creates a new quote.
    pub fn new(id: QuoteId, quote: &str, author: &str) -> Self {
        Quote {
            id,
            quote: String::from(quote),
            author: String::from(author),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} \"{}\" — {}", self.id, self.quote, self.author)
    }
}

/// Envelope of the `/quotes` listing endpoint.
///
/// Only `quotes` is required; the paging counters default to zero when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesResponse {
    /// Quotes of this page.
    pub quotes: Vec<Quote>,
    /// Total number of quotes known to the server.
    #[serde(default)]
    pub total: u64,
    /// Offset of this page.
    #[serde(default)]
    pub skip: u64,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: u64,
}

/// All quotes retrieved by one fetch, with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteList {
    quotes: Vec<Quote>,
}

impl QuoteList {
    /// Wraps a fetched batch, keeping the first occurrence of every identifier.
    pub fn new(quotes: Vec<Quote>) -> Self {
        let mut seen = HashSet::with_capacity(quotes.len());
        let mut unique = Vec::with_capacity(quotes.len());
        for quote in quotes {
            if seen.insert(quote.id) {
                unique.push(quote);
            } else {
                warn!("Dropping quote with repeated id {}", quote.id);
            }
        }
        QuoteList { quotes: unique }
    }

    /// Number of quotes in the list.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// `true` when nothing has been fetched.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// `true` if a quote with `id` is part of the list.
    pub fn contains(&self, id: QuoteId) -> bool {
        self.quotes.iter().any(|q| q.id == id)
    }

    /// Looks a quote up by identifier.
    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.id == id)
    }

    /// Quotes in fetch order.
    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    /// Iterates over the quotes in fetch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }
}

impl From<Vec<Quote>> for QuoteList {
    fn from(quotes: Vec<Quote>) -> Self {
        QuoteList::new(quotes)
    }
}

impl<'a> IntoIterator for &'a QuoteList {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes_dummyjson_payload() {
        let body = r#"{
            "quotes": [
                {"id": 1, "quote": "Life isn't about getting and having.", "author": "Kevin Kruse"},
                {"id": 2, "quote": "Whatever the mind can conceive.", "author": "Napoleon Hill"}
            ],
            "total": 1454,
            "skip": 0,
            "limit": 2
        }"#;
        let response: QuotesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.quotes.len(), 2);
        assert_eq!(response.quotes[1].author, "Napoleon Hill");
        assert_eq!(response.total, 1454);
    }

    #[test]
    fn test_response_without_counters() {
        let response: QuotesResponse =
            serde_json::from_str(r#"{"quotes": [{"id": 7, "quote": "q", "author": "a"}]}"#).unwrap();
        assert_eq!(response.quotes, vec![Quote::new(7, "q", "a")]);
        assert_eq!(response.limit, 0);
    }

    #[test]
    fn test_response_missing_quotes_field_fails() {
        assert!(serde_json::from_str::<QuotesResponse>(r#"{"total": 3}"#).is_err());
    }

    #[test]
    fn test_list_drops_repeated_ids() {
        let list = QuoteList::new(vec![
            Quote::new(1, "first", "a"),
            Quote::new(2, "second", "b"),
            Quote::new(1, "again", "c"),
        ]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|q| q.quote.as_str()), Some("first"));
        assert!(list.contains(2));
        assert!(!list.contains(3));
    }

    #[test]
    fn test_display() {
        let quote = Quote::new(3, "Stay hungry.", "Steve Jobs");
        assert_eq!(quote.to_string(), "#3 \"Stay hungry.\" — Steve Jobs");
    }
}
