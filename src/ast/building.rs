//! Growing the tree alongside the match
//!
//! The cursor carries a stack of open nodes. The top of the stack is the
//! attachment point: [`Matcher::leaf`] appends there, [`Matcher::group`]
//! pushes a fresh node for the duration of its matcher, and
//! [`Matcher::enter`] detaches the rightmost child and makes it the
//! attachment point until an enclosing [`Matcher::leave`] puts it back.
//!
//! Only [`Matcher::group`] and [`Matcher::undo`] clean up after a failing
//! matcher. Everything else leaves what it attached in place, exactly like
//! [`and`] leaves consumed input in place. The rule of thumb: wrap each
//! alternative of a backtracking [`or`](crate::matcher::or) in `undo`.

use std::cell::RefCell;

use super::Node;
use crate::matcher::{and, Matcher};

/// The attachment stack. The root is kept out of the stack so there is
/// always a current node.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    root: Node,
    open: Vec<Node>,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Builder {
            root: Node::root(),
            open: Vec::new(),
        }
    }

    pub(crate) fn current(&self) -> &Node {
        self.open.last().unwrap_or(&self.root)
    }

    fn current_mut(&mut self) -> &mut Node {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn depth(&self) -> usize {
        self.open.len()
    }

    fn len(&self) -> usize {
        self.current().children.len()
    }

    fn attach(&mut self, node: Node) {
        self.current_mut().children.push(node);
    }

    /// Child counts along the rightmost path down from the attachment
    /// point. Only nodes on this path can be entered and grown later.
    fn spine(&self) -> Vec<usize> {
        let mut lens = Vec::new();
        let mut node = Some(self.current());
        while let Some(n) = node {
            lens.push(n.children.len());
            node = n.children.last();
        }
        lens
    }

    /// Close scopes opened above `depth` and cut every node on the
    /// rightmost path back to the counts recorded by [`Builder::spine`]
    fn rollback(&mut self, depth: usize, spine: &[usize]) {
        self.close_to(depth);
        truncate_spine(self.current_mut(), spine);
    }

    /// Make the rightmost child the attachment point
    fn descend(&mut self) {
        let current = self.current_mut();
        let Some(child) = current.children.pop() else {
            panic!("`enter` on childless {} node", current.kind);
        };
        self.open.push(child);
    }

    /// Put every node opened above `depth` back under its parent
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(node) = self.open.pop() {
                self.attach(node);
            }
        }
    }

    /// Fold the last three children into `op [left, right]`
    fn binarize(&mut self) {
        let children = &mut self.current_mut().children;
        let at = children.len().saturating_sub(3);
        let mut last = children.split_off(at).into_iter();
        match (last.next(), last.next(), last.next()) {
            (Some(left), Some(mut op), Some(right)) => {
                op.children.push(left);
                op.children.push(right);
                children.push(op);
            }
            (left, op, right) => children.extend(left.into_iter().chain(op).chain(right)),
        }
    }

    pub(crate) fn into_root(mut self) -> Node {
        self.close_to(0);
        self.root
    }
}

fn truncate_spine(node: &mut Node, lens: &[usize]) {
    let Some((&len, rest)) = lens.split_first() else {
        return;
    };
    node.children.truncate(len);
    if let Some(child) = node.children.last_mut() {
        truncate_spine(child, rest);
    }
}

/// Match `left`, `op` and `right` in sequence, then fold the three nodes they
/// attached into one: `[2, +, 3]` becomes `+ [2, 3]`
///
/// Expressing `expr := term op expr | term` this way yields an operator tree
/// without any precedence handling in the grammar. If the three matchers
/// attached fewer than three nodes to the attachment point the tree is left
/// alone; nodes attached before the call are never folded.
pub fn binarize<'a>(left: Matcher<'a>, op: Matcher<'a>, right: Matcher<'a>) -> Matcher<'a> {
    let seq = and([left, op, right]);
    Matcher::new(move |c| {
        let depth = c.ast.depth();
        let len = c.ast.len();
        if !seq.run(c) {
            return false;
        }
        if c.ast.depth() != depth || c.ast.len() < len + 3 {
            tracing::trace!("binarize matched with fewer than three nodes");
            return true;
        }
        c.ast.binarize();
        true
    })
}

impl<'a> Matcher<'a> {
    /// On success attach a node of type `kind` named by the matched text
    pub fn leaf(self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        Matcher::new(move |c| {
            let ini = c.mark();
            if !self.run(c) {
                return false;
            }
            let name = c.token(ini, c.mark());
            c.ast.attach(Node::leaf(kind.clone(), name));
            true
        })
    }

    /// Collect whatever the receiver attaches under a new `kind` node
    ///
    /// The group is attached only if the receiver succeeds; on failure it is
    /// dropped together with anything attached inside it.
    pub fn group(self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        Matcher::new(move |c| {
            c.ast.open.push(Node::new(kind.clone()));
            let depth = c.ast.depth();
            let ok = self.run(c);
            c.ast.close_to(depth);
            let group = c.ast.open.pop();
            if let (true, Some(group)) = (ok, group) {
                c.ast.attach(group);
            }
            ok
        })
    }

    /// On success make the node just attached the attachment point, so the
    /// following leaves become its children. Pair with [`Matcher::leave`].
    ///
    /// # Panics
    ///
    /// Panics if the receiver succeeded without anything to enter.
    pub fn enter(self) -> Self {
        Matcher::new(move |c| {
            if !self.run(c) {
                return false;
            }
            c.ast.descend();
            true
        })
    }

    /// Restore the attachment point that was current before the receiver
    /// ran, whether it matched or not
    pub fn leave(self) -> Self {
        Matcher::new(move |c| {
            let depth = c.ast.depth();
            let ok = self.run(c);
            c.ast.close_to(depth);
            ok
        })
    }

    /// Match the receiver, then `children` in sequence with their nodes
    /// attached under the receiver's node
    pub fn child(self, children: impl IntoIterator<Item = Matcher<'a>>) -> Self {
        and([self.enter(), and(children)]).leave()
    }

    /// Make the receiver transactional: when it fails, put the cursor back
    /// and remove every node it attached, including nodes attached under
    /// existing nodes it entered
    pub fn undo(self) -> Self {
        Matcher::new(move |c| {
            let ini = c.mark();
            let depth = c.ast.depth();
            let spine = c.ast.spine();
            if self.run(c) {
                return true;
            }
            c.ast.rollback(depth, &spine);
            c.restore(ini);
            tracing::trace!(pos = ini.pos(), "undo");
            false
        })
    }

    /// On success copy the current attachment node into `out`
    pub fn tree(self, out: &'a RefCell<Node>) -> Self {
        Matcher::new(move |c| {
            if !self.run(c) {
                return false;
            }
            *out.borrow_mut() = c.ast.current().clone();
            true
        })
    }
}
