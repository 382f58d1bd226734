use crate::config::SidebarConfig;
use crate::error::SidebarError;
use crate::platform::Platform;
use core_types::{EntryId, ScrollOffset};
use html::Node;
use nav::NavTree;
use url::Url;

/// What a click inside the sidebar landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Link(EntryId),
    Toggle(EntryId),
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// A link was followed; the host should navigate to `destination`.
    Navigate {
        entry: EntryId,
        destination: String,
    },
    Toggled {
        entry: EntryId,
        expanded: bool,
    },
    Ignored,
}

/// How the scroll offset was settled on attachment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollRestore {
    /// A persisted offset was found and applied.
    Restored(ScrollOffset),
    /// Nothing was persisted; the active entry was scrolled into view.
    IntoView(EntryId),
    /// Nothing was persisted and no entry is active.
    Untouched,
}

/// Sidebar table of contents attached to one page.
///
/// Built by [`SidebarController::connect`], which renders the navigation, highlights the
/// entry for the current page, and settles the scroll offset. Afterwards the host forwards
/// clicks through [`SidebarController::handle_click`].
#[derive(Debug)]
pub struct SidebarController {
    config: SidebarConfig,
    dom: Node,
    tree: NavTree,
    current_page: Url,
    scroll_restore: ScrollRestore,
}

impl SidebarController {
    pub fn connect<P>(
        markup: &str,
        config: SidebarConfig,
        platform: &mut P,
    ) -> Result<Self, SidebarError>
    where
        P: Platform + ?Sized,
    {
        let (dom, mut tree) = NavTree::from_markup(markup);

        let location = platform.location();
        let base = parse_location(&location)?;
        let current_page = parse_location(&nav::current_page(&location, &config.index_document))?;

        tree.rewrite_links(&config.root_path, &base);
        match tree.locate(
            &current_page,
            &config.root_path,
            &config.index_document,
            config.index_aliases_first_entry,
        ) {
            Some(id) => {
                tree.activate(id);
                log::debug!(
                    target: "sidebar",
                    "active entry {:?} for {current_page}",
                    tree.entry(id).map(|e| e.title())
                );
            }
            None => log::debug!(target: "sidebar", "no entry matches {current_page}"),
        }

        let mut controller = SidebarController {
            config,
            dom,
            tree,
            current_page,
            scroll_restore: ScrollRestore::Untouched,
        };
        controller.refresh(platform);
        controller.scroll_restore = controller.restore_scroll(platform);
        Ok(controller)
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn active(&self) -> Option<EntryId> {
        self.tree.active()
    }

    /// Location the controller matched entries against, after index aliasing.
    pub fn current_page(&self) -> &Url {
        &self.current_page
    }

    pub fn scroll_restore(&self) -> ScrollRestore {
        self.scroll_restore
    }

    /// Current sidebar markup, including rewritten links and state classes.
    pub fn render(&self) -> String {
        html::serialize(&self.dom)
    }

    /// Maps a clicked markup node to a click target.
    pub fn target_for_node(&self, node: html::Id) -> ClickTarget {
        if let Some(id) = self.tree.entry_for_toggle(node) {
            return ClickTarget::Toggle(id);
        }
        self.tree
            .entries()
            .iter()
            .find(|e| e.link_node() == Some(node))
            .map_or(ClickTarget::Other, |e| ClickTarget::Link(e.id()))
    }

    /// Maps an href, as authored or as rewritten, to the link carrying it.
    pub fn target_for_href(&self, href: &str) -> ClickTarget {
        self.tree
            .find_by_destination(href)
            .filter(|id| self.tree.entry(*id).is_some_and(|e| e.is_link()))
            .map_or(ClickTarget::Other, ClickTarget::Link)
    }

    pub fn handle_click<P>(&mut self, target: ClickTarget, platform: &mut P) -> ClickOutcome
    where
        P: Platform + ?Sized,
    {
        match target {
            ClickTarget::Link(id) => self.follow_link(id, platform),
            ClickTarget::Toggle(id) => match self.toggle(id) {
                Some(expanded) => {
                    self.refresh(platform);
                    ClickOutcome::Toggled {
                        entry: id,
                        expanded,
                    }
                }
                None => ClickOutcome::Ignored,
            },
            ClickTarget::Other => ClickOutcome::Ignored,
        }
    }

    /// Flips the expanded state of one entry. Returns the new state.
    pub fn toggle(&mut self, id: EntryId) -> Option<bool> {
        let expanded = self.tree.toggle(id)?;
        log::trace!(target: "sidebar", "entry {id:?} expanded={expanded}");
        Some(expanded)
    }

    fn follow_link<P>(&mut self, id: EntryId, platform: &mut P) -> ClickOutcome
    where
        P: Platform + ?Sized,
    {
        let Some(entry) = self.tree.entry(id).filter(|e| e.is_link()) else {
            return ClickOutcome::Ignored;
        };
        let destination = match (entry.resolved(), entry.destination()) {
            (Some(url), _) => url.to_string(),
            (None, Some(raw)) => raw.to_string(),
            (None, None) => return ClickOutcome::Ignored,
        };

        let offset = platform.scroll_top();
        platform.storage_set(&self.config.scroll_key, &offset.to_string());
        log::trace!(target: "sidebar", "persisted scroll offset {offset} before {destination}");

        ClickOutcome::Navigate {
            entry: id,
            destination,
        }
    }

    fn refresh<P>(&mut self, platform: &mut P)
    where
        P: Platform + ?Sized,
    {
        self.tree.apply_to_dom(&mut self.dom);
        platform.set_content(&html::serialize(&self.dom));
    }

    /// Reads and clears the persisted offset. An offset wins over scroll-into-view.
    fn restore_scroll<P>(&self, platform: &mut P) -> ScrollRestore
    where
        P: Platform + ?Sized,
    {
        let key = self.config.scroll_key.as_str();
        let stored = platform.storage_get(key);
        platform.storage_remove(key);

        if let Some(raw) = stored.filter(|v| !v.is_empty()) {
            let offset = parse_offset(&raw);
            log::debug!(target: "sidebar", "restoring scroll offset {offset}");
            platform.set_scroll_top(offset);
            return ScrollRestore::Restored(offset);
        }

        match self.tree.active() {
            Some(active) => {
                platform.scroll_into_view(active, self.config.scroll_block);
                ScrollRestore::IntoView(active)
            }
            None => ScrollRestore::Untouched,
        }
    }
}

fn parse_location(location: &str) -> Result<Url, SidebarError> {
    Url::parse(location).map_err(|source| SidebarError::InvalidLocation {
        location: location.to_string(),
        source,
    })
}

/// Non-numeric or non-finite stored values scroll to the top.
fn parse_offset(raw: &str) -> ScrollOffset {
    match raw.trim().parse::<ScrollOffset>() {
        Ok(offset) if offset.is_finite() => offset,
        _ => {
            log::warn!(target: "sidebar", "ignoring malformed scroll offset {raw:?}");
            0.0
        }
    }
}
