pub type EntryIndex = u32;

/// Identifies one navigation entry inside a `NavTree`. Ids are dense and follow document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub EntryIndex);

impl EntryId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Vertical alignment requested when an entry is scrolled into view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

/// Scroll offset of the sidebar container, in CSS pixels.
pub type ScrollOffset = f64;
