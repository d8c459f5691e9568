//! Favorited quote identifiers mirrored to key-value storage.
//!
//! The store keeps ids in the order they were favorited, without duplicates. Every
//! `toggle` writes the whole set back to storage as a JSON list before returning, so
//! the persisted value always matches the in-memory one.
use log::{debug, info};
use quote_common::{QuoteId, Result};

use crate::storage::KeyValueStorage;

/// Storage key holding the JSON-encoded list of favorite ids.
pub const FAVORITES_KEY: &str = "qutera_favorites";

/// Set of favorite quote ids persisted through a `KeyValueStorage`.
pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    ids: Vec<QuoteId>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Create an empty store over `storage`. Call [`Self::load`] to rehydrate.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            ids: Vec::new(),
        }
    }

    /// Replace the in-memory set with the persisted one, if any.
    ///
    /// When nothing has been persisted yet the current set is left untouched.
    pub fn load(&mut self) -> Result<()> {
        if let Some(saved) = self.storage.get(FAVORITES_KEY)? {
            let ids: Vec<QuoteId> = serde_json::from_str(&saved)?;
            info!("Loaded {} favorite quotes", ids.len());
            self.ids = ids;
        }
        Ok(())
    }

    /// Flip membership of `id` and persist the result.
    ///
    /// Returns `true` if `id` is a favorite after the call. The in-memory set only
    /// changes once storage accepted the write.
    pub fn toggle(&mut self, id: QuoteId) -> Result<bool> {
        let mut next = self.ids.clone();
        let now_favorite = match next.iter().position(|&f| f == id) {
            Some(index) => {
                next.remove(index);
                false
            }
            None => {
                next.push(id);
                true
            }
        };
        let json = serde_json::to_string(&next)?;
        self.storage.set(FAVORITES_KEY, &json)?;
        self.ids = next;
        debug!("Quote {} favorite={}", id, now_favorite);
        Ok(now_favorite)
    }

    /// Membership test, no side effects.
    pub fn is_favorite(&self, id: QuoteId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite ids in the order they were added.
    pub fn ids(&self) -> &[QuoteId] {
        &self.ids
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
