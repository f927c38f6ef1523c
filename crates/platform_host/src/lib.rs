//! Typed host-domain contracts shared by the gallery runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It only exposes the lightweight
//! preference contract today; the concrete browser adapter lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
