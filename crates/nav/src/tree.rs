use crate::entry::NavEntry;
use crate::href::prefix_href;
use crate::scan::Scan;
use core_types::EntryId;
use html::Node;
use std::collections::HashMap;
use url::Url;

pub(crate) const ACTIVE_CLASS: &str = "active";
pub(crate) const EXPANDED_CLASS: &str = "expanded";

/// In-memory navigation tree built once from sidebar markup.
///
/// Entries are stored densely in document order; `EntryId(n)` is the n-th entry. Parent links
/// are plain ids, so ancestor walks never touch the DOM.
///
/// Invariant: at most one entry is active at a time.
#[derive(Clone, Debug, Default)]
pub struct NavTree {
    entries: Vec<NavEntry>,
    roots: Vec<EntryId>,
    active: Option<EntryId>,
    /// Links outside any entry; rewritten like entry links but never matched.
    anchors: Vec<LooseAnchor>,
}

#[derive(Clone, Debug)]
struct LooseAnchor {
    node: html::Id,
    href: String,
    destination: Option<String>,
}

impl NavTree {
    pub fn from_dom(dom: &Node) -> NavTree {
        let Scan {
            entries,
            roots,
            anchors,
        } = Scan::run(dom);
        log::trace!(
            target: "nav",
            "scanned {} entries ({} top-level, {} other links)",
            entries.len(),
            roots.len(),
            anchors.len()
        );
        NavTree {
            entries,
            roots,
            active: None,
            anchors: anchors
                .into_iter()
                .map(|(node, href)| LooseAnchor {
                    node,
                    href,
                    destination: None,
                })
                .collect(),
        }
    }

    /// Parses markup into a numbered DOM and the tree built from it.
    pub fn from_markup(markup: &str) -> (Node, NavTree) {
        let dom = html::parse_fragment(markup);
        let tree = NavTree::from_dom(&dom);
        (dom, tree)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&NavEntry> {
        self.entries.get(id.index())
    }

    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    pub fn active(&self) -> Option<EntryId> {
        self.active
    }

    /// First entry carrying a link, in document order.
    pub fn first_link(&self) -> Option<EntryId> {
        self.entries.iter().find(|e| e.is_link()).map(NavEntry::id)
    }

    pub fn entry_for_toggle(&self, toggle: html::Id) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|e| e.toggle == Some(toggle))
            .map(NavEntry::id)
    }

    /// First entry whose destination (after rewriting) or authored href equals `href`.
    pub fn find_by_destination(&self, href: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|e| e.destination() == Some(href) || e.href() == Some(href))
            .map(NavEntry::id)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: EntryId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.entry(id).and_then(NavEntry::parent),
        }
    }

    /// Applies the root-path prefix to every relative link and resolves it against `base`.
    pub fn rewrite_links(&mut self, root_path: &str, base: &Url) {
        for entry in &mut self.entries {
            let Some(href) = entry.href.as_deref() else {
                continue;
            };
            let destination = prefix_href(root_path, href);
            entry.resolved = match base.join(&destination) {
                Ok(url) => Some(url),
                Err(err) => {
                    log::debug!(target: "nav", "cannot resolve {destination:?}: {err}");
                    None
                }
            };
            if destination != href {
                log::trace!(target: "nav", "rewrote {href:?} -> {destination:?}");
            }
            entry.destination = Some(destination);
        }
        for anchor in &mut self.anchors {
            anchor.destination = Some(prefix_href(root_path, &anchor.href));
        }
    }

    /// Finds the entry for `current_page`.
    ///
    /// The first exact match on the resolved destination wins. Without a match, when the page
    /// sits at the site root (`root_path` is empty) and its location ends in `/index.html`, the
    /// first link entry stands in for it.
    pub fn locate(
        &self,
        current_page: &Url,
        root_path: &str,
        index_document: &str,
        alias_first_entry: bool,
    ) -> Option<EntryId> {
        let exact = self
            .entries
            .iter()
            .find(|e| e.resolved.as_ref() == Some(current_page))
            .map(NavEntry::id);
        if exact.is_some() {
            return exact;
        }
        // The whole location counts, so a query or fragment defeats the alias.
        let is_root_index = current_page
            .as_str()
            .strip_suffix(index_document)
            .is_some_and(|dir| dir.ends_with('/'));
        if alias_first_entry && root_path.is_empty() && is_root_index {
            return self.first_link();
        }
        None
    }

    /// Marks `id` active, clearing any previous active entry, and expands the entry and every
    /// ancestor. Other entries keep their expanded state.
    pub fn activate(&mut self, id: EntryId) -> bool {
        if id.index() >= self.entries.len() {
            return false;
        }
        if let Some(previous) = self.active.take() {
            self.entries[previous.index()].active = false;
        }
        self.entries[id.index()].active = true;
        self.entries[id.index()].expanded = true;
        self.active = Some(id);

        let mut next = self.entries[id.index()].parent;
        while let Some(ancestor) = next {
            let entry = &mut self.entries[ancestor.index()];
            entry.expanded = true;
            next = entry.parent;
        }
        true
    }

    /// Flips the expanded state of `id` and returns the new state.
    pub fn toggle(&mut self, id: EntryId) -> Option<bool> {
        let entry = self.entries.get_mut(id.index())?;
        entry.expanded = !entry.expanded;
        Some(entry.expanded)
    }

    /// Writes rewritten hrefs and the active/expanded classes back into `dom`.
    pub fn apply_to_dom(&self, dom: &mut Node) {
        enum Role<'a> {
            Item(EntryId),
            Link(EntryId),
            Other(&'a LooseAnchor),
        }
        let mut roles: HashMap<html::Id, Role<'_>> =
            HashMap::with_capacity(self.entries.len() * 2 + self.anchors.len());
        for entry in &self.entries {
            roles.insert(entry.item, Role::Item(entry.id));
            if let Some(link) = entry.link {
                roles.insert(link, Role::Link(entry.id));
            }
        }
        for anchor in &self.anchors {
            roles.insert(anchor.node, Role::Other(anchor));
        }

        html::traverse::for_each_node_mut(dom, &mut |node| match roles.get(&node.id()) {
            Some(Role::Item(id)) => {
                if self.entries[id.index()].expanded {
                    node.add_class(EXPANDED_CLASS);
                } else {
                    node.remove_class(EXPANDED_CLASS);
                }
            }
            Some(Role::Link(id)) => {
                let entry = &self.entries[id.index()];
                if let Some(destination) = &entry.destination {
                    node.set_attr("href", destination);
                }
                if entry.active {
                    node.add_class(ACTIVE_CLASS);
                } else {
                    node.remove_class(ACTIVE_CLASS);
                }
            }
            Some(Role::Other(anchor)) => {
                if let Some(destination) = &anchor.destination {
                    node.set_attr("href", destination);
                }
            }
            None => {}
        });
    }
}

pub struct Ancestors<'a> {
    tree: &'a NavTree,
    next: Option<EntryId>,
}

impl Iterator for Ancestors<'_> {
    type Item = EntryId;

    fn next(&mut self) -> Option<EntryId> {
        let current = self.next?;
        self.next = self.tree.entry(current).and_then(NavEntry::parent);
        Some(current)
    }
}
