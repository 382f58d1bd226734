use core_types::ScrollBlock;

pub const DEFAULT_SCROLL_KEY: &str = "sidebar-scroll";
pub const DEFAULT_INDEX_DOCUMENT: &str = "index.html";

/// Settings the hosting page supplies when the sidebar is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarConfig {
    /// Relative path from the current page to the site root, e.g. `""` or `"../../"`.
    pub root_path: String,
    /// Session storage key holding the persisted scroll offset.
    pub scroll_key: String,
    /// Document a directory URL stands for.
    pub index_document: String,
    /// Alignment used when the active entry is brought into view.
    pub scroll_block: ScrollBlock,
    /// Whether the root `index.html` selects the first entry when nothing matches.
    pub index_aliases_first_entry: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            root_path: String::new(),
            scroll_key: DEFAULT_SCROLL_KEY.to_string(),
            index_document: DEFAULT_INDEX_DOCUMENT.to_string(),
            scroll_block: ScrollBlock::Center,
            index_aliases_first_entry: true,
        }
    }
}

impl SidebarConfig {
    pub fn new(root_path: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Self::default()
        }
    }

    pub fn with_scroll_key(mut self, key: impl Into<String>) -> Self {
        self.scroll_key = key.into();
        self
    }

    pub fn with_index_document(mut self, document: impl Into<String>) -> Self {
        self.index_document = document.into();
        self
    }

    pub fn with_scroll_block(mut self, block: ScrollBlock) -> Self {
        self.scroll_block = block;
        self
    }

    pub fn with_index_alias(mut self, enabled: bool) -> Self {
        self.index_aliases_first_entry = enabled;
        self
    }
}
