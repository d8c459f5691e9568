//! Quote browsing session.
//!
//! The session owns the full list fetched from a `QuoteSource` and the subset that is
//! currently displayed. It exposes three core operations:
//!
//! - `QuoteSession::load_all()` — fetch the list and show a random sample of it.
//! - `QuoteSession::initial_sample()` — replace the displayed subset with a fresh
//!   random sample of at most `PAGE_SIZE` quotes.
//! - `QuoteSession::append_more(is_search_active)` — append up to `PAGE_SIZE` quotes
//!   that are not displayed yet, then let the `Presenter` flush and animate them.
//!
//! Design notes:
//! - All operations take `&self`. State sits behind a `Mutex` that is never held
//!   across an `.await`, so a session can be shared by reference between callers.
//! - `append_more` is guarded by the `loading_more` flag: a call made while another
//!   one is suspended on the presenter returns immediately without touching state.
//! - `loading` starts `true` and only ever flips to `false`, on the first successful
//!   load. `load_all` logs a failed fetch and leaves the session loading;
//!   `try_load_all` hands the error back instead.
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info};
use quote_common::net::DEFAULT_LIMIT;
use quote_common::{Quote, QuoteId, QuoteList, Result};
use rand::seq::SliceRandom;

use crate::presenter::{EntranceAnimation, Presenter};
use crate::search;
use crate::source::QuoteSource;

/// Number of quotes shown initially and added by each `append_more`.
pub const PAGE_SIZE: usize = 9;

struct SessionState {
    all_quotes: QuoteList,
    displayed: Vec<Quote>,
    loading: bool,
}

impl SessionState {
    fn initial_sample(&mut self) {
        let mut sample = self.all_quotes.as_slice().to_vec();
        shuffle(&mut sample);
        sample.truncate(PAGE_SIZE);
        self.displayed = sample;
    }

    /// Pick up to `PAGE_SIZE` quotes that are not displayed yet and append them.
    fn take_next_page(&mut self) -> Vec<Quote> {
        let shown: HashSet<QuoteId> = self.displayed.iter().map(|q| q.id).collect();
        let mut next: Vec<Quote> = self
            .all_quotes
            .iter()
            .filter(|q| !shown.contains(&q.id))
            .cloned()
            .collect();
        shuffle(&mut next);
        next.truncate(PAGE_SIZE);
        self.displayed.extend(next.iter().cloned());
        next
    }
}

// Uniform permutation; the ThreadRng must not live across an await point.
fn shuffle(quotes: &mut [Quote]) {
    quotes.shuffle(&mut rand::rng());
}

/// Clears the re-entrancy flag when `append_more` leaves, whatever the path.
struct LoadingMoreGuard<'a>(&'a AtomicBool);

impl Drop for LoadingMoreGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Browsing state over one fetched quote list.
pub struct QuoteSession {
    source: Arc<dyn QuoteSource>,
    presenter: Arc<dyn Presenter>,
    limit: u32,
    state: Mutex<SessionState>,
    loading_more: AtomicBool,
}

impl QuoteSession {
    /// Create a session that has not loaded anything yet.
    pub fn new(source: Arc<dyn QuoteSource>, presenter: Arc<dyn Presenter>) -> Self {
        Self {
            source,
            presenter,
            limit: DEFAULT_LIMIT,
            state: Mutex::new(SessionState {
                all_quotes: QuoteList::default(),
                displayed: Vec::new(),
                loading: true,
            }),
            loading_more: AtomicBool::new(false),
        }
    }

    /// Number of quotes requested from the source on load.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch all quotes and show an initial sample.
    ///
    /// A failure is logged and otherwise ignored: the session keeps what it had, which
    /// before the first successful load means loading with empty lists.
    pub async fn load_all(&self) {
        if let Err(e) = self.try_load_all().await {
            error!("Failed to load quotes: {}", e);
        }
    }

    /// Like [`Self::load_all`] but returns the error to the caller.
    ///
    /// Returns the number of quotes now held by the session.
    pub async fn try_load_all(&self) -> Result<usize> {
        let quotes = QuoteList::new(self.source.fetch_all(self.limit).await?);
        let count = quotes.len();

        let mut state = self.state();
        state.all_quotes = quotes;
        state.initial_sample();
        state.loading = false;
        info!("Loaded {} quotes, displaying {}", count, state.displayed.len());
        Ok(count)
    }

    /// Replace the displayed subset with a random sample of at most `PAGE_SIZE` quotes.
    pub fn initial_sample(&self) {
        self.state().initial_sample();
    }

    /// Append up to `PAGE_SIZE` quotes that are not displayed yet.
    ///
    /// Does nothing while a search is active or while another call is in progress.
    /// After appending, waits for the presenter to flush and then schedules the
    /// entrance animation on the new quotes only. Returns how many were appended.
    pub async fn append_more(&self, is_search_active: bool) -> usize {
        if is_search_active {
            debug!("Search is active, not appending");
            return 0;
        }
        if self
            .loading_more
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Append already in progress");
            return 0;
        }
        let _guard = LoadingMoreGuard(&self.loading_more);

        let (first_index, added) = {
            let mut state = self.state();
            let first_index = state.displayed.len();
            (first_index, state.take_next_page())
        };
        if added.is_empty() {
            debug!("All quotes are displayed");
            return 0;
        }

        self.presenter.flush().await;
        self.presenter
            .animate_entrance(first_index, &added, &EntranceAnimation::default());
        debug!("Appended {} quotes at {}", added.len(), first_index);
        added.len()
    }

    /// Quotes currently displayed, in display order.
    pub fn displayed(&self) -> Vec<Quote> {
        self.state().displayed.clone()
    }

    /// Everything the last successful fetch returned.
    pub fn all_quotes(&self) -> QuoteList {
        self.state().all_quotes.clone()
    }

    /// `true` until the first successful load.
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// `true` while an `append_more` call is in progress.
    pub fn is_loading_more(&self) -> bool {
        self.loading_more.load(Ordering::Acquire)
    }

    /// `true` if some fetched quote is not displayed yet.
    pub fn has_more(&self) -> bool {
        let state = self.state();
        state.displayed.len() < state.all_quotes.len()
    }

    /// Fetched quotes whose text or author contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<Quote> {
        search::filter(&self.state().all_quotes, term)
    }
}
