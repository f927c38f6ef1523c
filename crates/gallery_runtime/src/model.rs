//! Gallery state types and the fixed card catalogue.

use crate::toast::ToastState;

/// Diagnostic label shown when nothing holds focus.
pub const NO_FOCUS_LABEL: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human-facing label used by the metrics panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Raw value written to the preference store.
    pub fn pref_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored preference. Anything other than `light`/`dark` is rejected.
    pub fn from_pref(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("light") {
            Some(Self::Light)
        } else if raw.eq_ignore_ascii_case("dark") {
            Some(Self::Dark)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Media,
    Analysis,
    Production,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Self::Media => "Media",
            Self::Analysis => "Analysis",
            Self::Production => "Production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Active tag filter. `All` is the "no filter" sentinel and never appears on a card.
pub enum TagFilter {
    #[default]
    All,
    Only(Tag),
}

impl TagFilter {
    /// Filter options in chip order.
    pub const OPTIONS: [TagFilter; 4] = [
        TagFilter::All,
        TagFilter::Only(Tag::Media),
        TagFilter::Only(Tag::Analysis),
        TagFilter::Only(Tag::Production),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(tag) => tag.label(),
        }
    }

    pub fn matches(self, tag: Tag) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub tag: Tag,
}

impl Card {
    pub const fn new(title: &'static str, description: &'static str, tag: Tag) -> Self {
        Self {
            title,
            description,
            tag,
        }
    }

    /// Lower-cased haystack searched by the gallery query.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tag.label()).to_lowercase()
    }
}

const CARD_CATALOGUE: [Card; 9] = [
    Card::new(
        "Movie Library",
        "Browse your collection like a mini streaming UI.",
        Tag::Media,
    ),
    Card::new(
        "Story Breakdown",
        "Analyze what makes a movie rewatchable.",
        Tag::Analysis,
    ),
    Card::new(
        "Behind the Scenes",
        "Production trivia and hidden stories.",
        Tag::Production,
    ),
    Card::new(
        "Watchlist",
        "Queue up classics and track rewatches.",
        Tag::Media,
    ),
    Card::new(
        "Timeline Notes",
        "Scene-by-scene notes with timestamps.",
        Tag::Analysis,
    ),
    Card::new(
        "Sound + Score",
        "Why the music elevates the story.",
        Tag::Production,
    ),
    Card::new(
        "Characters",
        "Motives, arcs, and what lands emotionally.",
        Tag::Analysis,
    ),
    Card::new(
        "Practical Effects",
        "Old-school craft that still holds up.",
        Tag::Production,
    ),
    Card::new(
        "Collections",
        "Tags, categories, and smart sorting.",
        Tag::Media,
    ),
];

/// Cards in their startup order.
pub fn default_cards() -> Vec<Card> {
    CARD_CATALOGUE.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Gallery state owned by the runtime provider.
pub struct GalleryState {
    pub theme: Theme,
    pub active_filter: TagFilter,
    pub search_query: String,
    pub cards: Vec<Card>,
    /// Tag name of the element focused when the last key went through the router.
    pub focused_element: String,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            active_filter: TagFilter::All,
            search_query: String::new(),
            cards: default_cards(),
            focused_element: NO_FOCUS_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    pub open: bool,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient overlay state: the command palette and the toast surface.
pub struct OverlayState {
    pub palette: PaletteState,
    pub toast: ToastState,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalogue_order_and_tags_are_fixed() {
        let cards = default_cards();
        let titles: Vec<_> = cards.iter().map(|card| card.title).collect();
        assert_eq!(
            titles,
            vec![
                "Movie Library",
                "Story Breakdown",
                "Behind the Scenes",
                "Watchlist",
                "Timeline Notes",
                "Sound + Score",
                "Characters",
                "Practical Effects",
                "Collections",
            ]
        );
        for tag in [Tag::Media, Tag::Analysis, Tag::Production] {
            assert_eq!(cards.iter().filter(|card| card.tag == tag).count(), 3);
        }
    }

    #[test]
    fn theme_pref_parsing_is_lenient_about_case_and_rejects_garbage() {
        assert_eq!(Theme::from_pref("light"), Some(Theme::Light));
        assert_eq!(Theme::from_pref(" DARK "), Some(Theme::Dark));
        assert_eq!(Theme::from_pref("sepia"), None);
        assert_eq!(Theme::from_pref(""), None);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn filter_options_follow_chip_order() {
        let labels: Vec<_> = TagFilter::OPTIONS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Media", "Analysis", "Production"]);
        assert!(TagFilter::All.matches(Tag::Production));
        assert!(!TagFilter::Only(Tag::Media).matches(Tag::Analysis));
    }
}
