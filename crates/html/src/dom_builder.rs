use crate::types::{Id, Node, Token};

/// Builds a document tree from a token list.
///
/// Unmatched end tags pop the open-element stack down to the nearest element with the same
/// name and are ignored when no such element is open. A `<li>` start tag implicitly closes an
/// open `<li>` that belongs to the same list, mirroring the HTML end-tag omission rule.
/// Every node is created with `Id(0)`; call [`assign_node_ids`](crate::assign_node_ids).
pub fn build_dom(tokens: &[Token]) -> Node {
    let mut arena = NodeArena::new();
    let root_index = arena.push(ArenaNode::Document {
        doctype: None,
        children: Vec::new(),
    });

    let mut open_elements: Vec<usize> = Vec::new();

    for token in tokens {
        match token {
            Token::Doctype(s) => arena.set_doctype(root_index, s.clone()),
            Token::Comment(c) => {
                let parent_index = open_elements.last().copied().unwrap_or(root_index);
                arena.add_child(parent_index, ArenaNode::Comment { text: c.clone() });
            }
            Token::Text(txt) => {
                if !txt.is_empty() {
                    let parent_index = open_elements.last().copied().unwrap_or(root_index);
                    arena.add_child(parent_index, ArenaNode::Text { text: txt.clone() });
                }
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                if name == "li" {
                    close_open_list_item(&arena, &mut open_elements);
                }
                let parent_index = open_elements.last().copied().unwrap_or(root_index);
                let new_index = arena.add_child(
                    parent_index,
                    ArenaNode::Element {
                        name: name.clone(),
                        attributes: attributes.clone(),
                        children: Vec::new(),
                    },
                );
                if !*self_closing {
                    open_elements.push(new_index);
                }
            }
            Token::EndTag(name) => {
                if let Some(pos) = open_elements
                    .iter()
                    .rposition(|&index| arena.is_element_named(index, name))
                {
                    open_elements.truncate(pos);
                }
            }
        }
    }

    arena.into_dom(root_index)
}

/// Pops an open `<li>` when no list element was opened after it.
fn close_open_list_item(arena: &NodeArena, open_elements: &mut Vec<usize>) {
    let scope = open_elements
        .iter()
        .rposition(|&index| {
            arena.is_element_named(index, "li")
                || arena.is_element_named(index, "ol")
                || arena.is_element_named(index, "ul")
        });
    if let Some(pos) = scope
        && arena.is_element_named(open_elements[pos], "li")
    {
        open_elements.truncate(pos);
    }
}

#[derive(Debug)]
enum ArenaNode {
    Document {
        doctype: Option<String>,
        children: Vec<usize>,
    },
    Element {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<usize>,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

impl ArenaNode {
    fn children(&self) -> &[usize] {
        match self {
            ArenaNode::Document { children, .. } | ArenaNode::Element { children, .. } => children,
            ArenaNode::Text { .. } | ArenaNode::Comment { .. } => &[],
        }
    }
}

#[derive(Debug)]
struct NodeArena {
    nodes: Vec<ArenaNode>,
}

impl NodeArena {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, node: ArenaNode) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    fn add_child(&mut self, parent_index: usize, child: ArenaNode) -> usize {
        let child_index = self.push(child);
        match &mut self.nodes[parent_index] {
            ArenaNode::Document { children, .. } | ArenaNode::Element { children, .. } => {
                children.push(child_index);
            }
            _ => unreachable!("dom builder parent cannot have children"),
        }
        child_index
    }

    fn set_doctype(&mut self, root_index: usize, doctype: String) {
        if let ArenaNode::Document { doctype: dt, .. } = &mut self.nodes[root_index] {
            *dt = Some(doctype);
        }
    }

    fn is_element_named(&self, node_index: usize, target: &str) -> bool {
        match &self.nodes[node_index] {
            ArenaNode::Element { name, .. } => name.eq_ignore_ascii_case(target),
            _ => false,
        }
    }

    fn into_dom(self, root_index: usize) -> Node {
        let mut nodes = self.nodes;
        let mut built: Vec<Node> = Vec::with_capacity(nodes.len());

        // Iterative postorder: a node is built once all of its children sit on top of `built`,
        // in document order, so deep navigation trees never recurse.
        let mut stack: Vec<(usize, bool)> = vec![(root_index, false)];
        while let Some((node_index, visited)) = stack.pop() {
            if !visited {
                stack.push((node_index, true));
                for &child_index in nodes[node_index].children().iter().rev() {
                    stack.push((child_index, false));
                }
                continue;
            }

            let child_count = nodes[node_index].children().len();
            let children = built.split_off(built.len() - child_count);
            let node = match &mut nodes[node_index] {
                ArenaNode::Document { doctype, .. } => Node::Document {
                    id: Id(0),
                    doctype: doctype.take(),
                    children,
                },
                ArenaNode::Element {
                    name, attributes, ..
                } => Node::Element {
                    id: Id(0),
                    name: std::mem::take(name),
                    attributes: std::mem::take(attributes),
                    children,
                },
                ArenaNode::Text { text } => Node::Text {
                    id: Id(0),
                    text: std::mem::take(text),
                },
                ArenaNode::Comment { text } => Node::Comment {
                    id: Id(0),
                    text: std::mem::take(text),
                },
            };
            built.push(node);
        }

        debug_assert_eq!(built.len(), 1, "dom builder builds exactly one root node");
        built.pop().unwrap_or(Node::Document {
            id: Id(0),
            doctype: None,
            children: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn element_names(node: &Node) -> Vec<&str> {
        node.children()
            .iter()
            .filter_map(Node::element_name)
            .collect()
    }

    #[test]
    fn builds_nested_lists() {
        let dom = build_dom(&tokenize(
            r#"<ol class="chapter"><li><a href="a.html">A</a></li><li><ol class="section"><li>B</li></ol></li></ol>"#,
        ));
        let ol = &dom.children()[0];
        assert!(ol.is_element("ol"));
        assert_eq!(element_names(ol), ["li", "li"]);
        let nested = &ol.children()[1].children()[0];
        assert!(nested.is_element("ol"));
        assert_eq!(element_names(nested), ["li"]);
    }

    #[test]
    fn list_item_start_closes_open_item() {
        let dom = build_dom(&tokenize("<ol><li>one<li>two<li><ol><li>inner</ol></ol>"));
        let ol = &dom.children()[0];
        assert_eq!(element_names(ol), ["li", "li", "li"]);
        let inner = &ol.children()[2].children()[0];
        assert_eq!(element_names(inner), ["li"]);
    }

    #[test]
    fn stray_end_tag_is_ignored() {
        let dom = build_dom(&tokenize("<ol></div><li>x</li></ol>"));
        assert_eq!(element_names(&dom.children()[0]), ["li"]);
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let depth: usize = 2_000;
        let mut tokens = Vec::with_capacity(depth * 2);
        for _ in 0..depth {
            tokens.push(Token::StartTag {
                name: "ol".into(),
                attributes: Vec::new(),
                self_closing: false,
            });
        }
        for _ in 0..depth {
            tokens.push(Token::EndTag("ol".into()));
        }

        let dom = build_dom(&tokens);
        let mut current = &dom.children()[0];
        let mut seen = 1usize;
        while let Some(next) = current.children().first() {
            assert!(next.is_element("ol"));
            current = next;
            seen += 1;
        }
        assert_eq!(seen, depth);
    }
}
