//! Reducer actions, side-effect intents, and transition logic for the gallery runtime.

use rand::Rng;
use thiserror::Error;

use crate::{
    commands::find_command,
    model::{Card, GalleryState, OverlayState, TagFilter, Theme},
};

/// Message shown after the grid order is randomized.
pub const SHUFFLED_TOAST: &str = "Shuffled.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_gallery`].
pub enum GalleryAction {
    /// Apply the theme loaded from the preference store at boot.
    HydrateTheme {
        theme: Theme,
    },
    ToggleTheme,
    /// Select a tag filter, optionally emptying the search query as well.
    SetFilter {
        filter: TagFilter,
        clear_search: bool,
    },
    SetSearchQuery {
        query: String,
    },
    ClearSearch,
    ShuffleCards,
    /// Activate a card by title.
    OpenCard {
        title: String,
    },
    ShowToast {
        message: String,
    },
    /// Timer-driven dismissal for the toast generation it was armed for.
    DismissToast {
        generation: u64,
    },
    OpenPalette,
    ClosePalette,
    TogglePalette,
    SetPaletteQuery {
        query: String,
    },
    /// Run a registered command, then close the palette.
    RunCommand {
        command_id: String,
    },
    FocusSearch,
    /// Diagnostic: tag name of the element focused when a key went through the router.
    RecordFocusedElement {
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by the reducer and executed by the host layer.
pub enum RuntimeEffect {
    PersistTheme,
    ApplyTheme(Theme),
    FocusSearchInput,
    FocusPaletteInput,
    /// Arm the dismissal timer for a freshly shown toast.
    ScheduleToastDismissal {
        generation: u64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected reducer actions. State is left untouched.
pub enum ReducerError {
    #[error("command `{0}` is not registered")]
    CommandNotFound(String),
    #[error("card `{0}` does not exist")]
    CardNotFound(String),
}

/// Applies `action` to the gallery and overlay state and returns the effects to run.
///
/// `rng` is only consulted by [`GalleryAction::ShuffleCards`].
///
/// # Errors
///
/// Returns [`ReducerError`] for unknown command ids or card titles.
pub fn reduce_gallery<R: Rng + ?Sized>(
    state: &mut GalleryState,
    overlays: &mut OverlayState,
    action: GalleryAction,
    rng: &mut R,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    match action {
        GalleryAction::HydrateTheme { theme } => {
            state.theme = theme;
            effects.push(RuntimeEffect::ApplyTheme(theme));
        }
        GalleryAction::ToggleTheme => {
            state.theme = state.theme.toggled();
            effects.push(RuntimeEffect::PersistTheme);
            effects.push(RuntimeEffect::ApplyTheme(state.theme));
            show_toast(
                overlays,
                format!("Theme: {}", state.theme.pref_value()),
                &mut effects,
            );
        }
        GalleryAction::SetFilter {
            filter,
            clear_search,
        } => {
            state.active_filter = filter;
            if clear_search {
                state.search_query.clear();
            }
        }
        GalleryAction::SetSearchQuery { query } => {
            state.search_query = query;
        }
        GalleryAction::ClearSearch => {
            state.search_query.clear();
        }
        GalleryAction::ShuffleCards => {
            shuffle_cards(&mut state.cards, rng);
            show_toast(overlays, SHUFFLED_TOAST, &mut effects);
        }
        GalleryAction::OpenCard { title } => {
            let card = state
                .cards
                .iter()
                .find(|card| card.title == title)
                .ok_or(ReducerError::CardNotFound(title))?;
            let message = format!("Opened: {}", card.title);
            show_toast(overlays, message, &mut effects);
        }
        GalleryAction::ShowToast { message } => {
            show_toast(overlays, message, &mut effects);
        }
        GalleryAction::DismissToast { generation } => {
            overlays.toast.dismiss(generation);
        }
        GalleryAction::OpenPalette => {
            open_palette(overlays, &mut effects);
        }
        GalleryAction::ClosePalette => {
            overlays.palette.open = false;
        }
        GalleryAction::TogglePalette => {
            if overlays.palette.open {
                overlays.palette.open = false;
            } else {
                open_palette(overlays, &mut effects);
            }
        }
        GalleryAction::SetPaletteQuery { query } => {
            overlays.palette.query = query;
        }
        GalleryAction::RunCommand { command_id } => {
            let command =
                find_command(&command_id).ok_or(ReducerError::CommandNotFound(command_id))?;
            effects.extend(reduce_gallery(
                state,
                overlays,
                command.action.into_action(),
                rng,
            )?);
            overlays.palette.open = false;
        }
        GalleryAction::FocusSearch => {
            effects.push(RuntimeEffect::FocusSearchInput);
        }
        GalleryAction::RecordFocusedElement { label } => {
            state.focused_element = label;
        }
    }

    Ok(effects)
}

fn open_palette(overlays: &mut OverlayState, effects: &mut Vec<RuntimeEffect>) {
    overlays.palette.open = true;
    overlays.palette.query.clear();
    effects.push(RuntimeEffect::FocusPaletteInput);
}

fn show_toast(
    overlays: &mut OverlayState,
    message: impl Into<String>,
    effects: &mut Vec<RuntimeEffect>,
) {
    let generation = overlays.toast.show(message);
    effects.push(RuntimeEffect::ScheduleToastDismissal { generation });
}

/// Fisher–Yates shuffle: every permutation is equally likely for a uniform `rng`.
pub fn shuffle_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range(0..=i);
        cards.swap(i, j);
    }
}
