//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (one raw string per key).
///
/// Implementations report failures as `Err(String)`; callers are expected to degrade rather
/// than surface them, since every preference has a sensible default.
pub trait PrefsStore {
    /// Loads the raw string stored for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw string for a preference key, replacing any previous value.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for hosts without durable storage.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string. Values live for the lifetime of the page.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_prefs_store_round_trip_and_overwrite() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        assert_eq!(block_on(store_obj.load_pref("theme")).expect("load"), None);
        block_on(store_obj.save_pref("theme", "light")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("theme")).expect("load"),
            Some("light".to_string())
        );
        block_on(store_obj.save_pref("theme", "dark")).expect("overwrite");
        assert_eq!(
            block_on(store_obj.load_pref("theme")).expect("load"),
            Some("dark".to_string())
        );
    }

    #[test]
    fn memory_prefs_store_clones_share_entries() {
        let store = MemoryPrefsStore::with_entry("theme", "light");
        let clone = store.clone();
        block_on(clone.save_pref("theme", "dark")).expect("save through clone");
        assert_eq!(
            block_on(store.load_pref("theme")).expect("load"),
            Some("dark".to_string())
        );
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        block_on(store_obj.save_pref("theme", "light")).expect("save");
        assert_eq!(block_on(store_obj.load_pref("theme")).expect("load"), None);
    }
}
