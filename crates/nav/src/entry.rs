use core_types::EntryId;
use url::Url;

/// One navigation item: a `li.chapter-item` and the link or header it carries.
#[derive(Clone, Debug)]
pub struct NavEntry {
    pub(crate) id: EntryId,
    pub(crate) item: html::Id,
    pub(crate) link: Option<html::Id>,
    pub(crate) toggle: Option<html::Id>,
    pub(crate) title: String,
    /// `href` exactly as authored in the markup.
    pub(crate) href: Option<String>,
    /// `href` after the root-path prefix was applied.
    pub(crate) destination: Option<String>,
    pub(crate) resolved: Option<Url>,
    pub(crate) parent: Option<EntryId>,
    pub(crate) children: Vec<EntryId>,
    pub(crate) active: bool,
    pub(crate) expanded: bool,
}

impl NavEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Node id of the entry's `li` element.
    pub fn item_node(&self) -> html::Id {
        self.item
    }

    pub fn link_node(&self) -> Option<html::Id> {
        self.link
    }

    pub fn toggle_node(&self) -> Option<html::Id> {
        self.toggle
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref().or(self.href.as_deref())
    }

    /// Absolute URL of the destination, available once links were rewritten against a base.
    pub fn resolved(&self) -> Option<&Url> {
        self.resolved.as_ref()
    }

    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    pub fn children(&self) -> &[EntryId] {
        &self.children
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}
