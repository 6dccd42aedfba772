//! Complete grammars built from the public combinators
//!
//! These double as worked examples of the AST engine: every backtracking
//! alternative is wrapped in [`Matcher::undo`], recursion goes through
//! [`Recursive`](crate::recursion::Recursive), and operator trees come from
//! [`binarize`](crate::ast::binarize).

use crate::ast::Node;
use crate::code::Code;
use crate::matcher::Matcher;

pub mod expression;
pub mod json;

pub use expression::{evaluate, expression};
pub use json::json;

/// Run `grammar` over the whole of `src` and return the tree
///
/// Returns `None` when the grammar fails or stops before the end of the
/// input.
pub fn parse(grammar: &Matcher<'_>, src: &str) -> Option<Node> {
    let mut code = Code::new(src);
    if !code.run(grammar) {
        tracing::debug!(pos = code.here(), "grammar did not match");
        return None;
    }
    if code.more() {
        let stop = code.mark();
        tracing::debug!(pos = stop.pos(), row = stop.row(), col = stop.col(), "unparsed input left");
        return None;
    }
    Some(code.into_tree())
}
