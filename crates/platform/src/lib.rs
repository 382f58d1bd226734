//! In-process host for the sidebar controller.
//!
//! [`HeadlessPlatform`] stands in for a browser tab: it remembers the page location, the
//! last markup written into the sidebar, the sidebar's scroll offset, and a session store
//! that survives same-tab navigations. Scroll-into-view requests are resolved against a
//! fixed-height row layout so hosts can observe the offset a browser would settle on.

mod storage;

pub use storage::MemoryStorage;

use core_types::{EntryId, ScrollBlock, ScrollOffset};
use sidebar::Platform;

/// Geometry used to turn scroll-into-view requests into offsets.
///
/// Each entry occupies one row of `row_height` pixels, in document order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub height: f64,
    pub row_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            height: 600.0,
            row_height: 24.0,
        }
    }
}

impl Viewport {
    /// Offset that brings row `row` into view, given the current offset.
    pub fn offset_for(&self, row: usize, block: ScrollBlock, current: ScrollOffset) -> ScrollOffset {
        let top = row as f64 * self.row_height;
        let bottom = top + self.row_height;
        let offset = match block {
            ScrollBlock::Start => top,
            ScrollBlock::Center => top - (self.height - self.row_height) / 2.0,
            ScrollBlock::End => bottom - self.height,
            ScrollBlock::Nearest => {
                if top < current {
                    top
                } else if bottom > current + self.height {
                    bottom - self.height
                } else {
                    current
                }
            }
        };
        offset.max(0.0)
    }
}

#[derive(Debug)]
pub struct HeadlessPlatform {
    location: String,
    content: String,
    scroll_top: ScrollOffset,
    viewport: Viewport,
    scrolled_into_view: Vec<(EntryId, ScrollBlock)>,
    storage: MemoryStorage,
}

impl HeadlessPlatform {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            content: String::new(),
            scroll_top: 0.0,
            viewport: Viewport::default(),
            scrolled_into_view: Vec::new(),
            storage: MemoryStorage::new(),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Loads another page in the same tab.
    ///
    /// The sidebar content and scroll offset start over; session storage is kept.
    pub fn navigate(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.content.clear();
        self.scroll_top = 0.0;
        self.scrolled_into_view.clear();
        log::trace!(target: "platform", "navigated to {}", self.location);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll-into-view requests since the last page load, oldest first.
    pub fn scrolled_into_view(&self) -> &[(EntryId, ScrollBlock)] {
        &self.scrolled_into_view
    }

    pub fn storage(&self) -> &MemoryStorage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut MemoryStorage {
        &mut self.storage
    }
}

impl Platform for HeadlessPlatform {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn set_content(&mut self, markup: &str) {
        self.content.clear();
        self.content.push_str(markup);
    }

    fn scroll_top(&self) -> ScrollOffset {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: ScrollOffset) {
        self.scroll_top = offset.max(0.0);
    }

    fn scroll_into_view(&mut self, entry: EntryId, block: ScrollBlock) {
        self.scroll_top = self
            .viewport
            .offset_for(entry.index(), block, self.scroll_top);
        self.scrolled_into_view.push((entry, block));
        log::trace!(
            target: "platform",
            "scrolled {entry:?} into view ({block:?}) at {}",
            self.scroll_top
        );
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.get(key).map(str::to_string)
    }

    fn storage_set(&mut self, key: &str, value: &str) {
        self.storage.set(key, value.to_string());
    }

    fn storage_remove(&mut self, key: &str) {
        self.storage.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        height: 100.0,
        row_height: 10.0,
    };

    #[test]
    fn offsets_per_block() {
        assert_eq!(VIEW.offset_for(20, ScrollBlock::Start, 0.0), 200.0);
        assert_eq!(VIEW.offset_for(20, ScrollBlock::Center, 0.0), 155.0);
        assert_eq!(VIEW.offset_for(20, ScrollBlock::End, 0.0), 110.0);
    }

    #[test]
    fn offsets_never_go_negative() {
        assert_eq!(VIEW.offset_for(1, ScrollBlock::Center, 0.0), 0.0);
        assert_eq!(VIEW.offset_for(0, ScrollBlock::End, 0.0), 0.0);
    }

    #[test]
    fn nearest_keeps_visible_rows_in_place() {
        assert_eq!(VIEW.offset_for(5, ScrollBlock::Nearest, 30.0), 30.0);
        assert_eq!(VIEW.offset_for(1, ScrollBlock::Nearest, 30.0), 10.0);
        assert_eq!(VIEW.offset_for(20, ScrollBlock::Nearest, 30.0), 110.0);
    }

    #[test]
    fn navigate_keeps_session_storage() {
        let mut platform = HeadlessPlatform::new("https://docs.example/a.html");
        platform.set_content("<ol></ol>");
        platform.set_scroll_top(64.0);
        platform.storage_set("sidebar-scroll", "64");

        platform.navigate("https://docs.example/b.html");
        assert_eq!(platform.location(), "https://docs.example/b.html");
        assert_eq!(platform.content(), "");
        assert_eq!(platform.scroll_top(), 0.0);
        assert_eq!(platform.storage_get("sidebar-scroll").as_deref(), Some("64"));
    }

    #[test]
    fn scroll_into_view_is_recorded() {
        let mut platform = HeadlessPlatform::new("https://docs.example/").with_viewport(VIEW);
        platform.scroll_into_view(EntryId(20), ScrollBlock::Start);
        assert_eq!(platform.scroll_top(), 200.0);
        assert_eq!(
            platform.scrolled_into_view(),
            [(EntryId(20), ScrollBlock::Start)]
        );
    }

    #[test]
    fn storage_remove_is_idempotent() {
        let mut platform = HeadlessPlatform::new("https://docs.example/");
        platform.storage_remove("missing");
        assert!(platform.storage().is_empty());
    }
}
