//! Static command registry backing the command palette.

use crate::{model::TagFilter, reducer::GalleryAction};

/// Message raised by the "Show Toast" command.
pub const DEMO_COMMAND_TOAST: &str = "Yep, Rust can look premium too.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Stable command identifier.
pub struct CommandId(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Behavior bound to a palette command.
pub enum CommandAction {
    ToggleTheme,
    FocusSearch,
    ClearFilters,
    ShuffleCards,
    ShowToast(&'static str),
}

impl CommandAction {
    /// Reducer action that performs this command.
    pub fn into_action(self) -> GalleryAction {
        match self {
            Self::ToggleTheme => GalleryAction::ToggleTheme,
            Self::FocusSearch => GalleryAction::FocusSearch,
            Self::ClearFilters => GalleryAction::SetFilter {
                filter: TagFilter::All,
                clear_search: true,
            },
            Self::ShuffleCards => GalleryAction::ShuffleCards,
            Self::ShowToast(message) => GalleryAction::ShowToast {
                message: message.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
    pub title: &'static str,
    pub description: &'static str,
    pub action: CommandAction,
}

impl Command {
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || format!("{} {}", self.title, self.description)
                .to_lowercase()
                .contains(needle)
    }
}

/// Registered palette commands in display order.
pub const COMMAND_REGISTRY: &[Command] = &[
    Command {
        id: CommandId("theme.toggle"),
        title: "Toggle Theme",
        description: "Switch dark/light mode",
        action: CommandAction::ToggleTheme,
    },
    Command {
        id: CommandId("search.focus"),
        title: "Focus Search",
        description: "Jump to the search input",
        action: CommandAction::FocusSearch,
    },
    Command {
        id: CommandId("filters.clear"),
        title: "Clear Filters",
        description: "Reset tag + search query",
        action: CommandAction::ClearFilters,
    },
    Command {
        id: CommandId("cards.shuffle"),
        title: "Shuffle Cards",
        description: "Randomize the grid order",
        action: CommandAction::ShuffleCards,
    },
    Command {
        id: CommandId("toast.demo"),
        title: "Show Toast",
        description: "Tiny notification demo",
        action: CommandAction::ShowToast(DEMO_COMMAND_TOAST),
    },
];

/// Commands whose `"{title} {description}"` contains the trimmed, lower-cased query.
pub fn visible_commands(query: &str) -> Vec<&'static Command> {
    let needle = query.trim().to_lowercase();
    COMMAND_REGISTRY
        .iter()
        .filter(|command| command.matches(&needle))
        .collect()
}

pub fn find_command(id: &str) -> Option<&'static Command> {
    COMMAND_REGISTRY.iter().find(|command| command.id.0 == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(commands: &[&Command]) -> Vec<&'static str> {
        commands.iter().map(|command| command.title).collect()
    }

    #[test]
    fn registry_lists_five_commands_in_order() {
        assert_eq!(
            titles(&visible_commands("")),
            vec![
                "Toggle Theme",
                "Focus Search",
                "Clear Filters",
                "Shuffle Cards",
                "Show Toast",
            ]
        );
    }

    #[test]
    fn query_matches_title_or_description_case_insensitively() {
        assert_eq!(titles(&visible_commands("  THEME ")), vec!["Toggle Theme"]);
        assert_eq!(titles(&visible_commands("randomize")), vec!["Shuffle Cards"]);
        assert_eq!(
            titles(&visible_commands("search")),
            vec!["Focus Search", "Clear Filters"]
        );
        assert!(visible_commands("nothing like this").is_empty());
    }

    #[test]
    fn ids_resolve_and_bind_reducer_actions() {
        let command = find_command("filters.clear").expect("clear filters registered");
        assert_eq!(
            command.action.into_action(),
            GalleryAction::SetFilter {
                filter: TagFilter::All,
                clear_search: true,
            }
        );
        assert!(find_command("missing").is_none());
    }
}
