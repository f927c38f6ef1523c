//! Card gallery runtime: state model, derived views, command palette, toast controller, key
//! routing, and the Leptos components that render them.

pub mod commands;
pub mod components;
mod effect_executor;
mod host;
pub mod keyboard;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod toast;
pub mod view;

pub use components::GalleryShell;
pub use host::GalleryHostContext;
pub use model::*;
pub use persistence::{load_theme, persist_theme, THEME_PREF_KEY};
pub use reducer::{reduce_gallery, GalleryAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext};
