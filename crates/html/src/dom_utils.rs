use crate::Node;

impl Node {
    /// Value of the attribute `key`; `None` when absent or valueless.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }

    pub fn has_attr(&self, key: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
            }
            _ => false,
        }
    }

    /// Sets (or inserts) an attribute. No-op on non-element nodes.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        let Node::Element { attributes, .. } = self else {
            return;
        };
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, v)) => *v = Some(value.to_string()),
            None => attributes.push((key.to_string(), Some(value.to_string()))),
        }
    }

    pub fn attr_has_token(&self, key: &str, token: &str) -> bool {
        self.attr(key)
            .is_some_and(|v| v.split_ascii_whitespace().any(|t| t == token))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_has_token("class", class)
    }

    /// Adds `class` to the class list, keeping existing tokens in order.
    pub fn add_class(&mut self, class: &str) {
        if !matches!(self, Node::Element { .. }) || self.has_class(class) {
            return;
        }
        let mut tokens: Vec<&str> = self
            .attr("class")
            .map(|v| v.split_ascii_whitespace().collect())
            .unwrap_or_default();
        tokens.push(class);
        let joined = tokens.join(" ");
        self.set_attr("class", &joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let joined = self
            .attr("class")
            .map(|v| {
                v.split_ascii_whitespace()
                    .filter(|t| *t != class)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        self.set_attr("class", &joined);
    }
}
