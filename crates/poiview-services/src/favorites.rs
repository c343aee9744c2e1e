//! Favorited places.
//!
//! Favorites are a JSON array of place ids stored under [`FAVORITES_KEY`].
//! Ids are only ever added; adding one that is already present leaves the
//! stored value untouched.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::place::PlaceId;
use crate::storage::{KeyValueStore, StorageError};

pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    update_lock: Mutex<()>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            update_lock: Mutex::new(()),
        }
    }

    /// Add `id` to the favorites set.
    ///
    /// Returns `true` if it was inserted, `false` if it was already present.
    pub fn add_favorite(&self, id: &PlaceId) -> Result<bool, StorageError> {
        let _guard = self.update_lock.lock();

        let mut ids: Vec<PlaceId> = match self.store.get(FAVORITES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Corrupt(format!("{}: {}", FAVORITES_KEY, e)))?,
            None => Vec::new(),
        };

        if ids.contains(id) {
            tracing::debug!("Place {} is already a favorite", id);
            return Ok(false);
        }

        ids.push(id.clone());
        let raw = serde_json::to_string(&ids).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.store.set(FAVORITES_KEY, &raw)?;

        tracing::info!("Added place {} to favorites", id);
        Ok(true)
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore").finish_non_exhaustive()
    }
}
