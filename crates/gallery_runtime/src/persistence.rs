//! Theme preference persistence over the injected [`PrefsStore`].

use platform_host::PrefsStore;

use crate::model::Theme;

/// Preference key holding the raw theme value (`light` or `dark`).
pub const THEME_PREF_KEY: &str = "theme";

/// Loads the persisted theme.
///
/// Missing, malformed, or unreadable values fall back to [`Theme::Dark`]; failures are logged.
pub async fn load_theme(store: &dyn PrefsStore) -> Theme {
    match store.load_pref(THEME_PREF_KEY).await {
        Ok(Some(raw)) => Theme::from_pref(&raw).unwrap_or_else(|| {
            leptos::logging::warn!("ignoring unrecognized theme preference `{raw}`");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            leptos::logging::warn!("theme preference load failed: {err}");
            Theme::default()
        }
    }
}

/// Persists `theme` as its raw preference value.
pub async fn persist_theme(store: &dyn PrefsStore, theme: Theme) -> Result<(), String> {
    store.save_pref(THEME_PREF_KEY, theme.pref_value()).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, PrefsStoreFuture};
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingPrefsStore;

    impl PrefsStore for FailingPrefsStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(async { Err("storage disabled".to_string()) })
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _value: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("storage disabled".to_string()) })
        }
    }

    #[test]
    fn missing_or_malformed_theme_defaults_to_dark() {
        let empty = MemoryPrefsStore::default();
        assert_eq!(block_on(load_theme(&empty)), Theme::Dark);

        let garbage = MemoryPrefsStore::with_entry(THEME_PREF_KEY, "{\"skin\":1}");
        assert_eq!(block_on(load_theme(&garbage)), Theme::Dark);
    }

    #[test]
    fn failing_store_degrades_silently() {
        let store = FailingPrefsStore;
        assert_eq!(block_on(load_theme(&store)), Theme::Dark);
        assert!(block_on(persist_theme(&store, Theme::Light)).is_err());
    }

    #[test]
    fn theme_round_trips_as_raw_string() {
        let store = MemoryPrefsStore::default();
        block_on(persist_theme(&store, Theme::Light)).expect("persist light");
        assert_eq!(
            block_on(store.load_pref(THEME_PREF_KEY)).expect("load"),
            Some("light".to_string())
        );
        assert_eq!(block_on(load_theme(&store)), Theme::Light);

        block_on(persist_theme(&store, Theme::Light.toggled())).expect("persist dark");
        assert_eq!(block_on(load_theme(&store)), Theme::Dark);
    }
}
