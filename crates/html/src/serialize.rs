use crate::Node;
use crate::entities::{escape_attr, escape_text};
use crate::tokenizer::is_void_element;

/// Serializes a node (and its subtree) back to markup.
///
/// The document node contributes only its doctype and children. `script`/`style` bodies are
/// written verbatim; all other text is escaped.
pub fn serialize(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, false, &mut out);
    out
}

fn write_node(node: &Node, rawtext: bool, out: &mut String) {
    match node {
        Node::Document {
            doctype, children, ..
        } => {
            if let Some(dt) = doctype {
                out.push_str("<!");
                out.push_str(dt);
                out.push('>');
            }
            for c in children {
                write_node(c, false, out);
            }
        }
        Node::Element {
            name,
            attributes,
            children,
            ..
        } => {
            out.push('<');
            out.push_str(name);
            for (k, v) in attributes {
                out.push(' ');
                out.push_str(k);
                if let Some(v) = v {
                    out.push_str("=\"");
                    escape_attr(v, out);
                    out.push('"');
                }
            }
            out.push('>');
            if is_void_element(name) {
                return;
            }
            let raw = name == "script" || name == "style";
            for c in children {
                write_node(c, raw, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::Text { text, .. } => {
            if rawtext {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        Node::Comment { text, .. } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_dom, tokenize};

    #[test]
    fn serializes_navigation_markup_stably() {
        let markup = r#"<ol class="chapter"><li class="chapter-item expanded"><a href="a.html"><strong aria-hidden="true">1.</strong> Q&amp;A</a><a class="toggle"><div>&#10095;</div></a></li><li class="spacer"></li></ol>"#;
        let dom = build_dom(&tokenize(markup));
        let once = serialize(&dom);
        assert_eq!(
            once,
            concat!(
                r#"<ol class="chapter"><li class="chapter-item expanded"><a href="a.html">"#,
                r#"<strong aria-hidden="true">1.</strong> Q&amp;A</a>"#,
                "<a class=\"toggle\"><div>\u{276F}</div></a></li>",
                r#"<li class="spacer"></li></ol>"#
            )
        );
        let twice = serialize(&build_dom(&tokenize(&once)));
        assert_eq!(once, twice);
    }

    #[test]
    fn serializes_void_elements_and_valueless_attributes() {
        let dom = build_dom(&tokenize("<li hidden>a<br>b</li>"));
        assert_eq!(serialize(&dom), "<li hidden>a<br>b</li>");
    }
}
