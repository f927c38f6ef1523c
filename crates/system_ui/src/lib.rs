//! Shared UI primitive library for the gallery shell.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed
//! by the stylesheet. Gallery components compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    AppShell, Badge, Button, ButtonVariant, Card, Cluster, EmptyState, Grid, Heading, LayoutGap,
    LayoutJustify, MenuItem, MenuSurface, Metric, Modal, Stack, Text, TextField, TextTone, Toast,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Badge, Button, ButtonVariant, Card, Cluster, EmptyState, Grid, Heading,
        LayoutGap, LayoutJustify, MenuItem, MenuSurface, Metric, Modal, Stack, Text, TextField,
        TextTone, Toast,
    };
}
