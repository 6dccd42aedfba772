//! The tree built while matching
//!
//! A [`Node`] has a type tag, the token it was created from (empty for
//! groups) and the nodes attached to it, in the order they were attached.
//! Nodes own their children outright; there are no parent links.
//!
//! The matchers that grow the tree live in [`building`].

use std::fmt;

use serde::Serialize;

use crate::code::Token;
use crate::formats::{self, FormatError, Style};

pub mod building;

pub use building::binarize;

/// Type tag of the node every parse starts from
pub const ROOT: &str = "Root";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Token::is_empty")]
    pub name: Token,
    #[serde(rename = "args", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: impl Into<String>) -> Self {
        Node {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn leaf(kind: impl Into<String>, name: Token) -> Self {
        Node {
            kind: kind.into(),
            name,
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Node::new(ROOT)
    }

    /// The text of the token the node was built from
    pub fn text(&self) -> &str {
        &self.name.text
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child
    ///
    /// # Panics
    ///
    /// Panics if the node has no children.
    pub fn left(&self) -> &Node {
        match self.children.first() {
            Some(node) => node,
            None => panic!("`left` called on childless {} node", self.kind),
        }
    }

    /// Last child
    ///
    /// # Panics
    ///
    /// Panics if the node has no children.
    pub fn right(&self) -> &Node {
        match self.children.last() {
            Some(node) => node,
            None => panic!("`right` called on childless {} node", self.kind),
        }
    }

    /// Depth-first traversal; see [`Visitor`]
    pub fn walk(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_node(self) {
            return;
        }
        for child in &self.children {
            child.walk(visitor);
        }
        visitor.leave_node(self);
    }

    /// Render the tree in one of the printer styles
    pub fn print(&self, style: Style) -> Result<String, FormatError> {
        formats::render(self, style)
    }
}

/// Renders as `json-inline`
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formats::printer::print(self, &formats::printer::JsonInline))
    }
}

/// Visitor for [`Node::walk`]
///
/// `visit_node` runs before a node's children; returning `false` skips the
/// children and the matching `leave_node` call.
pub trait Visitor {
    fn visit_node(&mut self, _node: &Node) -> bool {
        true
    }
    fn leave_node(&mut self, _node: &Node) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Token {
        Token {
            text: text.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Node {
        let mut plus = Node::leaf("BinExpr", tok("+"));
        plus.children.push(Node::leaf("Value", tok("2")));
        plus.children.push(Node::leaf("Value", tok("3")));
        let mut root = Node::root();
        root.children.push(plus);
        root
    }

    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        skip: Option<&'static str>,
    }

    impl Visitor for Trace {
        fn visit_node(&mut self, node: &Node) -> bool {
            self.events.push(format!("+{}", node.kind));
            self.skip != Some(node.kind.as_str())
        }
        fn leave_node(&mut self, node: &Node) {
            self.events.push(format!("-{}", node.kind));
        }
    }

    #[test]
    fn test_left_right() {
        let root = sample();
        let plus = root.left();
        assert_eq!(plus.left().text(), "2");
        assert_eq!(plus.right().text(), "3");
        assert!(plus.left().is_leaf());
    }

    #[test]
    #[should_panic(expected = "childless Value node")]
    fn test_right_on_leaf_panics() {
        let root = sample();
        root.left().left().right();
    }

    #[test]
    fn test_walk_order() {
        let mut trace = Trace::default();
        sample().walk(&mut trace);
        assert_eq!(
            trace.events,
            vec!["+Root", "+BinExpr", "+Value", "-Value", "+Value", "-Value", "-BinExpr", "-Root"]
        );
    }

    #[test]
    fn test_walk_can_skip_children() {
        let mut trace = Trace {
            skip: Some("BinExpr"),
            ..Default::default()
        };
        sample().walk(&mut trace);
        assert_eq!(trace.events, vec!["+Root", "+BinExpr", "-Root"]);
    }

    #[test]
    fn test_display_is_json_inline() {
        assert_eq!(
            sample().to_string(),
            r#"{ "type": "Root", "args": [{ "type": "BinExpr", "name": "+", "args": [{ "type": "Value", "name": "2" }, { "type": "Value", "name": "3" }] }] }"#
        );
    }
}
