//! Builds entries from sidebar markup.
//!
//! An entry is an `li` carrying the `chapter-item` class. Nested sections are an `ol`/`ul`
//! either inside the entry's own `li` or inside the `li` that immediately follows it. A
//! nested list after a non-entry sibling belongs to the enclosing list's parent.
//!
//! Anchors that carry an href but are not an entry's link (part titles, stray links) are
//! collected too, so their hrefs get the same root-path treatment.

use crate::entry::NavEntry;
use core_types::EntryId;
use html::Node;
use std::collections::HashSet;

pub(crate) const CHAPTER_ITEM_CLASS: &str = "chapter-item";
pub(crate) const TOGGLE_CLASS: &str = "toggle";

fn is_list(node: &Node) -> bool {
    node.is_element("ol") || node.is_element("ul")
}

/// First list element in document order.
fn find_root_list(node: &Node) -> Option<&Node> {
    if is_list(node) {
        return Some(node);
    }
    node.children().iter().find_map(find_root_list)
}

/// Lists nested under `node`, without descending into those lists.
fn nested_lists<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    for c in node.children() {
        if is_list(c) {
            out.push(c);
        } else {
            nested_lists(c, out);
        }
    }
}

/// Anchors under `node`, stopping at nested lists.
fn anchors<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    for c in node.children() {
        if is_list(c) {
            continue;
        }
        if c.is_element("a") {
            out.push(c);
        }
        anchors(c, out);
    }
}

/// Anchors with an href that are not in `taken`, in document order.
fn loose_anchors(node: &Node, taken: &HashSet<html::Id>, out: &mut Vec<(html::Id, String)>) {
    for c in node.children() {
        if c.is_element("a")
            && !taken.contains(&c.id())
            && let Some(href) = c.attr("href")
        {
            out.push((c.id(), href.to_string()));
        }
        loose_anchors(c, taken, out);
    }
}

/// Text of `node` excluding nested lists and toggle controls.
fn own_title(node: &Node) -> String {
    fn walk(node: &Node, out: &mut String) {
        for c in node.children() {
            match c {
                Node::Text { text, .. } => out.push_str(text),
                Node::Element { .. } if is_list(c) || c.has_class(TOGGLE_CLASS) => {}
                Node::Element { .. } => walk(c, out),
                _ => {}
            }
        }
    }
    let mut raw = String::new();
    walk(node, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) struct Scan {
    pub(crate) entries: Vec<NavEntry>,
    pub(crate) roots: Vec<EntryId>,
    pub(crate) anchors: Vec<(html::Id, String)>,
}

impl Scan {
    pub(crate) fn run(dom: &Node) -> Scan {
        let mut scan = Scan {
            entries: Vec::new(),
            roots: Vec::new(),
            anchors: Vec::new(),
        };
        if let Some(list) = find_root_list(dom) {
            scan.walk_list(list, None);
        }
        let taken: HashSet<html::Id> = scan.entries.iter().filter_map(|e| e.link).collect();
        loose_anchors(dom, &taken, &mut scan.anchors);
        scan
    }

    fn walk_list(&mut self, list: &Node, parent: Option<EntryId>) {
        let mut previous_entry: Option<EntryId> = None;
        for child in list.children() {
            if !child.is_element("li") {
                continue;
            }
            let mut lists = Vec::new();
            nested_lists(child, &mut lists);

            if child.has_class(CHAPTER_ITEM_CLASS) {
                let id = self.push_entry(child, parent);
                for nested in lists {
                    self.walk_list(nested, Some(id));
                }
                previous_entry = Some(id);
            } else {
                let owner = previous_entry.or(parent);
                for nested in lists {
                    self.walk_list(nested, owner);
                }
                previous_entry = None;
            }
        }
    }

    fn push_entry(&mut self, li: &Node, parent: Option<EntryId>) -> EntryId {
        let id = EntryId(self.entries.len() as u32);

        let mut found = Vec::new();
        anchors(li, &mut found);
        let toggle = found.iter().find(|a| a.has_class(TOGGLE_CLASS));
        let link = found
            .iter()
            .find(|a| !a.has_class(TOGGLE_CLASS) && a.has_attr("href"));

        let title = match link {
            Some(a) => own_title(a),
            None => own_title(li),
        };

        self.entries.push(NavEntry {
            id,
            item: li.id(),
            link: link.map(|a| a.id()),
            toggle: toggle.map(|a| a.id()),
            title,
            href: link.and_then(|a| a.attr("href")).map(str::to_string),
            destination: None,
            resolved: None,
            parent,
            children: Vec::new(),
            active: false,
            expanded: li.has_class("expanded"),
        });

        match parent {
            Some(p) => self.entries[p.index()].children.push(id),
            None => self.roots.push(id),
        }
        id
    }
}
