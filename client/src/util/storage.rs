//! `localStorage` as an `enhance` key-value store.
//!
//! TRADE-OFFS
//! ==========
//! When `localStorage` cannot be opened (private browsing, sandboxed
//! iframes) the page falls back to an in-memory store: preferences then last
//! only for the current page view.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::rc::Rc;

use enhance::store::{KeyValueStore, MemoryStore};

#[cfg(feature = "hydrate")]
use enhance::error::StoreError;

/// Browser `localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore(web_sys::Storage);

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the window has no usable
    /// `localStorage`.
    pub fn open() -> Result<Self, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(Self)
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }
}

/// The page's persistent store, or a session-only one if unavailable.
pub fn open_store() -> Rc<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        match LocalStore::open() {
            Ok(store) => return Rc::new(store),
            Err(err) => log::warn!("cinehub: {err}, favorites will not persist"),
        }
    }
    Rc::new(MemoryStore::new())
}
