//! Document-level keyboard routing as a pure decision table.

use crate::reducer::GalleryAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The parts of a keydown event the router looks at.
pub struct KeyChord<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

impl<'a> KeyChord<'a> {
    pub fn plain(key: &'a str) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn from_event(ev: &'a web_sys::KeyboardEvent, key: &'a str) -> Self {
        Self {
            key,
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    ClosePalette,
    TogglePalette,
    FocusSearch,
    Passthrough,
}

impl KeyRoute {
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Passthrough)
    }

    /// Escape is consumed outright so nothing underneath the palette sees it.
    pub fn stops_propagation(self) -> bool {
        matches!(self, Self::ClosePalette)
    }

    pub fn action(self) -> Option<GalleryAction> {
        match self {
            Self::ClosePalette => Some(GalleryAction::ClosePalette),
            Self::TogglePalette => Some(GalleryAction::TogglePalette),
            Self::FocusSearch => Some(GalleryAction::FocusSearch),
            Self::Passthrough => None,
        }
    }
}

/// Routes a keydown. First match wins:
///
/// 1. palette open + `Escape` closes it
/// 2. `k`/`K` with Ctrl or Meta toggles the palette
/// 3. palette closed + `/` focuses search
pub fn route_keydown(chord: KeyChord<'_>, palette_open: bool) -> KeyRoute {
    if palette_open && chord.key == "Escape" {
        return KeyRoute::ClosePalette;
    }
    if (chord.ctrl || chord.meta) && chord.key.eq_ignore_ascii_case("k") {
        return KeyRoute::TogglePalette;
    }
    if !palette_open && chord.key == "/" {
        return KeyRoute::FocusSearch;
    }
    KeyRoute::Passthrough
}

/// Keys that activate a focused card or palette row.
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter"
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ctrl(key: &str) -> KeyChord<'_> {
        KeyChord {
            key,
            ctrl: true,
            meta: false,
        }
    }

    #[test]
    fn escape_only_matters_while_palette_is_open() {
        let route = route_keydown(KeyChord::plain("Escape"), true);
        assert_eq!(route, KeyRoute::ClosePalette);
        assert!(route.prevents_default());
        assert!(route.stops_propagation());

        assert_eq!(
            route_keydown(KeyChord::plain("Escape"), false),
            KeyRoute::Passthrough
        );
    }

    #[test]
    fn ctrl_or_meta_k_toggles_in_both_states() {
        assert_eq!(route_keydown(ctrl("k"), false), KeyRoute::TogglePalette);
        assert_eq!(route_keydown(ctrl("K"), true), KeyRoute::TogglePalette);
        let meta = KeyChord {
            key: "k",
            ctrl: false,
            meta: true,
        };
        assert_eq!(route_keydown(meta, false), KeyRoute::TogglePalette);
        assert_eq!(route_keydown(KeyChord::plain("k"), false), KeyRoute::Passthrough);
    }

    #[test]
    fn slash_focuses_search_only_when_palette_closed() {
        let route = route_keydown(KeyChord::plain("/"), false);
        assert_eq!(route, KeyRoute::FocusSearch);
        assert!(route.prevents_default());
        assert!(!route.stops_propagation());
        assert_eq!(route.action(), Some(GalleryAction::FocusSearch));

        assert_eq!(route_keydown(KeyChord::plain("/"), true), KeyRoute::Passthrough);
    }

    #[test]
    fn other_keys_pass_through_untouched() {
        for key in ["a", "Enter", "Tab", "ArrowDown"] {
            let route = route_keydown(KeyChord::plain(key), false);
            assert_eq!(route, KeyRoute::Passthrough);
            assert!(!route.prevents_default());
            assert_eq!(route.action(), None);
        }
    }
}
