//! Case-insensitive quote search.
use quote_common::Quote;

/// `true` if `term` occurs in the quote text or the author, ignoring case.
///
/// A blank term matches every quote.
pub fn matches(quote: &Quote, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    quote.quote.to_lowercase().contains(&term) || quote.author.to_lowercase().contains(&term)
}

/// Quotes from `quotes` matching `term`, in their original order.
pub fn filter<'a, I>(quotes: I, term: &str) -> Vec<Quote>
where
    I: IntoIterator<Item = &'a Quote>,
{
    quotes
        .into_iter()
        .filter(|q| matches(q, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_text_and_author() {
        let quote = Quote::new(1, "The only way out is through.", "Robert Frost");
        assert!(matches(&quote, "WAY OUT"));
        assert!(matches(&quote, "frost"));
        assert!(matches(&quote, "  "));
        assert!(!matches(&quote, "emerson"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let quotes = vec![
            Quote::new(1, "Act.", "Ann"),
            Quote::new(2, "Wait.", "Bob"),
            Quote::new(3, "React.", "Cy"),
        ];
        let found = filter(&quotes, "act");
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
