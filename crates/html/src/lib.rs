//! Minimal HTML handling for pre-generated navigation markup: tokenize, build a tree,
//! edit attributes and class lists, serialize back.

pub mod traverse;

mod dom_builder;
mod dom_utils;
mod entities;
mod serialize;
mod tokenizer;
mod types;

pub use crate::dom_builder::build_dom;
pub use crate::serialize::serialize;
pub use crate::tokenizer::tokenize;
pub use crate::traverse::assign_node_ids;
pub use crate::types::{Id, Node, NodeId, Token};

/// Tokenizes, builds, and numbers a markup fragment in one step.
pub fn parse_fragment(markup: &str) -> Node {
    let mut dom = build_dom(&tokenize(markup));
    assign_node_ids(&mut dom);
    dom
}
