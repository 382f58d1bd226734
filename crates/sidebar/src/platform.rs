//! Platform access for the sidebar controller.
//!
//! The controller never touches a browser directly. Everything it reads or writes outside
//! its own navigation tree goes through [`Platform`], so a host can back it with a real
//! document or with an in-memory fake.

use core_types::{EntryId, ScrollBlock, ScrollOffset};

/// Document, viewport, and session-storage operations the sidebar depends on.
pub trait Platform {
    // =========================================================================
    // Document
    // =========================================================================

    /// Absolute URL of the page currently displayed.
    fn location(&self) -> String;

    /// Replaces the sidebar element's content with `markup`.
    fn set_content(&mut self, markup: &str);

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Current vertical scroll offset of the sidebar container.
    fn scroll_top(&self) -> ScrollOffset;

    fn set_scroll_top(&mut self, offset: ScrollOffset);

    /// Scrolls the container so that `entry` is visible, aligned per `block`.
    fn scroll_into_view(&mut self, entry: EntryId, block: ScrollBlock);

    // =========================================================================
    // Session storage
    // =========================================================================

    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&mut self, key: &str, value: &str);

    fn storage_remove(&mut self, key: &str);
}

impl<P: Platform + ?Sized> Platform for &mut P {
    fn location(&self) -> String {
        (**self).location()
    }

    fn set_content(&mut self, markup: &str) {
        (**self).set_content(markup)
    }

    fn scroll_top(&self) -> ScrollOffset {
        (**self).scroll_top()
    }

    fn set_scroll_top(&mut self, offset: ScrollOffset) {
        (**self).set_scroll_top(offset)
    }

    fn scroll_into_view(&mut self, entry: EntryId, block: ScrollBlock) {
        (**self).scroll_into_view(entry, block)
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        (**self).storage_get(key)
    }

    fn storage_set(&mut self, key: &str, value: &str) {
        (**self).storage_set(key, value)
    }

    fn storage_remove(&mut self, key: &str) {
        (**self).storage_remove(key)
    }
}
