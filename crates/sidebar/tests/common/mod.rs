#![allow(dead_code)]

use sidebar::{EntryId, Platform, ScrollBlock, ScrollOffset};
use std::collections::HashMap;

/// In-memory platform that records every effect the controller has.
#[derive(Debug, Default)]
pub struct FakePlatform {
    pub location: String,
    pub content: String,
    pub content_writes: usize,
    pub scroll_top: ScrollOffset,
    pub scroll_writes: Vec<ScrollOffset>,
    pub scrolled_into_view: Vec<(EntryId, ScrollBlock)>,
    pub storage: HashMap<String, String>,
}

impl FakePlatform {
    pub fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
            ..Self::default()
        }
    }

    pub fn with_stored(mut self, key: &str, value: &str) -> Self {
        self.storage.insert(key.to_string(), value.to_string());
        self
    }
}

impl Platform for FakePlatform {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn set_content(&mut self, markup: &str) {
        self.content = markup.to_string();
        self.content_writes += 1;
    }

    fn scroll_top(&self) -> ScrollOffset {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: ScrollOffset) {
        self.scroll_top = offset;
        self.scroll_writes.push(offset);
    }

    fn scroll_into_view(&mut self, entry: EntryId, block: ScrollBlock) {
        self.scrolled_into_view.push((entry, block));
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn storage_set(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_string(), value.to_string());
    }

    fn storage_remove(&mut self, key: &str) {
        self.storage.remove(key);
    }
}

pub const TWO_PAGES: &str = r#"<ol class="chapter"><li class="chapter-item "><a href="a.html">A</a></li><li class="chapter-item "><a href="b.html">B</a></li></ol>"#;

pub const NESTED: &str = r##"<ol class="chapter"><li class="chapter-item "><a href="index.html">Home</a></li><li class="chapter-item "><a href="guide/index.html">Guide</a><a class="toggle"><div>&#10095;</div></a></li><li><ol class="section"><li class="chapter-item "><a href="guide/install.html">Install</a></li><li class="chapter-item "><a href="guide/usage.html">Usage</a><a class="toggle"><div>&#10095;</div></a></li><li><ol class="section"><li class="chapter-item "><a href="guide/usage/flags.html">Flags</a></li></ol></li></ol></li><li class="chapter-item "><a href="sub/page.html">Sub page</a></li><li class="chapter-item "><a href="#faq">FAQ</a></li></ol>"##;
