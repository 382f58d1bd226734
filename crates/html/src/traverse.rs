use crate::{Id, Node};

/// Assigns preorder ids starting at 1 to every node that still carries `Id(0)`.
pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        if node.id() == Id(0) {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }
        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

/// Visits every node mutably in document order.
pub fn for_each_node_mut(node: &mut Node, f: &mut impl FnMut(&mut Node)) {
    f(node);
    if let Some(children) = node.children_mut() {
        for c in children {
            for_each_node_mut(c, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_dom, tokenize};

    #[test]
    fn ids_are_preorder() {
        let mut dom = build_dom(&tokenize("<ol><li>a</li><li>b</li></ol>"));
        assign_node_ids(&mut dom);
        assert_eq!(dom.id(), Id(1));
        let ol = &dom.children()[0];
        assert_eq!(ol.id(), Id(2));
        assert_eq!(ol.children()[1].id(), Id(5));
    }

    #[test]
    fn visits_every_node_in_document_order() {
        let mut dom = build_dom(&tokenize("<ol><li>a</li><li>b</li></ol>"));
        assign_node_ids(&mut dom);
        let mut seen = Vec::new();
        for_each_node_mut(&mut dom, &mut |node| {
            seen.push(node.id());
            if node.is_element("li") {
                node.add_class("chapter-item");
            }
        });
        assert_eq!(seen, (1..=6).map(Id).collect::<Vec<_>>());
        let ol = &dom.children()[0];
        assert!(ol.children().iter().all(|li| li.has_class("chapter-item")));
    }
}
