//! # sidebar
//!
//! Table-of-contents sidebar for static documentation pages.
//!
//! [`SidebarController::connect`] takes the pre-generated navigation markup, a
//! [`SidebarConfig`] carrying the page's root-path prefix, and a [`Platform`] giving access
//! to the document location, the sidebar viewport, and session storage. It renders the
//! navigation with links rewritten relative to the site root, marks the entry for the
//! current page active with its ancestors expanded, and restores the scroll offset that the
//! previous page persisted (or scrolls the active entry into view).
//!
//! Link clicks persist the scroll offset under the session key before navigation; toggle
//! clicks flip one entry's expanded state.

mod config;
mod controller;
mod error;
mod platform;

pub use config::{DEFAULT_INDEX_DOCUMENT, DEFAULT_SCROLL_KEY, SidebarConfig};
pub use controller::{ClickOutcome, ClickTarget, ScrollRestore, SidebarController};
pub use error::SidebarError;
pub use platform::Platform;

pub use core_types::{EntryId, ScrollBlock, ScrollOffset};
pub use nav::{NavEntry, NavTree};
