//! # nav
//!
//! Explicit navigation tree for a documentation sidebar.
//!
//! The sidebar markup is generated elsewhere and treated as opaque input. This crate parses
//! it once into a [`NavTree`] of [`NavEntry`] values (id, children, parent, active and
//! expanded flags) so that link rewriting, active-entry lookup, ancestor expansion and
//! toggling are plain tree operations. [`NavTree::apply_to_dom`] writes the resulting state
//! back into the markup tree for rendering.

mod entry;
mod href;
mod scan;
mod tree;

pub use entry::NavEntry;
pub use href::{current_page, is_relative_href, prefix_href};
pub use tree::{Ancestors, NavTree};
