//! Pure derived views over [`GalleryState`](crate::model::GalleryState).

use crate::model::{Card, GalleryState, TagFilter};

/// Returns the cards that pass both the tag filter and the text query, in input order.
///
/// A blank query matches everything. Matching is case-insensitive over
/// `"{title} {description} {tag}"`.
pub fn visible_cards<'a>(cards: &'a [Card], filter: TagFilter, query: &str) -> Vec<&'a Card> {
    let needle = query.trim().to_lowercase();
    cards
        .iter()
        .filter(|card| filter.matches(card.tag))
        .filter(|card| needle.is_empty() || card.search_text().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Values shown in the metrics panel.
pub struct GalleryMetrics {
    pub total: usize,
    pub filtered: usize,
    pub theme_label: &'static str,
    pub focused_element: String,
}

pub fn gallery_metrics(state: &GalleryState) -> GalleryMetrics {
    GalleryMetrics {
        total: state.cards.len(),
        filtered: visible_cards(&state.cards, state.active_filter, &state.search_query).len(),
        theme_label: state.theme.label(),
        focused_element: state.focused_element.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{default_cards, Tag, Theme};

    fn titles(cards: &[&Card]) -> Vec<&'static str> {
        cards.iter().map(|card| card.title).collect()
    }

    fn is_subsequence(view: &[&Card], cards: &[Card]) -> bool {
        let mut remaining = cards.iter();
        view.iter()
            .all(|wanted| remaining.any(|card| card.title == wanted.title))
    }

    #[test]
    fn all_filter_with_empty_query_returns_full_list_in_order() {
        let cards = default_cards();
        let view = visible_cards(&cards, TagFilter::All, "");
        let expected: Vec<_> = cards.iter().map(|card| card.title).collect();
        assert_eq!(titles(&view), expected);

        let whitespace = visible_cards(&cards, TagFilter::All, "   ");
        assert_eq!(whitespace.len(), cards.len());
    }

    #[test]
    fn results_are_order_preserving_subsequences() {
        let cards = default_cards();
        for filter in TagFilter::OPTIONS {
            for query in ["", "s", "the", "notes", "zzz", "media"] {
                let view = visible_cards(&cards, filter, query);
                assert!(
                    is_subsequence(&view, &cards),
                    "{filter:?} / {query:?} broke ordering"
                );
            }
        }
    }

    #[test]
    fn query_matching_is_case_insensitive_and_covers_tag_text() {
        let cards = default_cards();
        let upper = visible_cards(&cards, TagFilter::All, "MEDIA");
        let lower = visible_cards(&cards, TagFilter::All, "media");
        assert_eq!(titles(&upper), titles(&lower));
        assert_eq!(
            titles(&lower),
            vec!["Movie Library", "Watchlist", "Collections"]
        );
    }

    #[test]
    fn analysis_filter_with_scene_query_finds_timeline_notes_only() {
        let cards = default_cards();
        let view = visible_cards(&cards, TagFilter::Only(Tag::Analysis), "scene");
        assert_eq!(titles(&view), vec!["Timeline Notes"]);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let cards = default_cards();
        let view = visible_cards(&cards, TagFilter::All, "  watchlist  ");
        assert_eq!(titles(&view), vec!["Watchlist"]);
    }

    #[test]
    fn metrics_track_total_filtered_and_theme() {
        let mut state = GalleryState {
            active_filter: TagFilter::Only(Tag::Production),
            ..GalleryState::default()
        };
        state.theme = Theme::Light;
        let metrics = gallery_metrics(&state);
        assert_eq!(metrics.total, 9);
        assert_eq!(metrics.filtered, 3);
        assert_eq!(metrics.theme_label, "Light");
        assert_eq!(metrics.focused_element, "None");
    }
}
