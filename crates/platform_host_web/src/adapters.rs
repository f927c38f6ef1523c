use platform_host::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};

use crate::WebPrefsStore;

#[cfg(all(feature = "host-memory", feature = "host-stub"))]
compile_error!("features `host-memory` and `host-stub` are mutually exclusive; enable only one");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters (`localStorage`).
    Browser,
    /// Session-only in-memory adapters; preferences reset on reload.
    Memory,
    /// No-op adapters; nothing is read or written.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-memory")]
    {
        HostStrategy::Memory
    }

    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(any(feature = "host-memory", feature = "host-stub")))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Memory => "memory",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete preferences backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser-backed preference storage.
    Browser(WebPrefsStore),
    /// In-memory preference storage scoped to the current page.
    Memory(MemoryPrefsStore),
    /// No-op fallback.
    Stub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Memory(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, value),
            Self::Memory(store) => store.save_pref(key, value),
            Self::Stub(store) => store.save_pref(key, value),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Memory => PrefsStoreAdapter::Memory(MemoryPrefsStore::default()),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        let expected = match selected_host_strategy() {
            HostStrategy::Browser => "browser",
            HostStrategy::Memory => "memory",
            HostStrategy::Stub => "stub",
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn memory_adapter_delegates_to_inner_store() {
        let adapter = PrefsStoreAdapter::Memory(MemoryPrefsStore::default());
        block_on(adapter.save_pref("theme", "light")).expect("save");
        assert_eq!(
            block_on(adapter.load_pref("theme")).expect("load"),
            Some("light".to_string())
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_adapter_is_inert_off_wasm() {
        let adapter = PrefsStoreAdapter::Browser(WebPrefsStore);
        block_on(adapter.save_pref("theme", "light")).expect("save");
        assert_eq!(block_on(adapter.load_pref("theme")).expect("load"), None);
    }
}
