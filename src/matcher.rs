//! Matchers and the atoms grammars are built from
//!
//! A [`Matcher`] is a predicate over a [`Code`] cursor: it either succeeds,
//! possibly consuming input and attaching AST nodes, or fails. Failure is a
//! plain `false`; there is no error channel.
//!
//! Combining matchers never rewinds anything on its own. A sequence that
//! fails halfway leaves the cursor wherever the failing step left it, and the
//! nodes the successful steps attached stay attached. Backtracking points are
//! placed explicitly with [`Matcher::rewind_on_failure`] or, when the tree is
//! involved too, [`Matcher::undo`].
//!
//! ## Atoms
//!
//! - [`s`]: a literal string
//! - [`s_ref`]: a literal read from a capture slot at match time
//! - [`s_or`]: any one character out of a set
//! - [`f`]: one code point accepted by a predicate
//! - [`eq`] / [`eq_f`]: lookahead versions of [`s`] and [`f`]
//! - [`regex`]: a regular expression anchored at the cursor

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use regex::Regex;

use crate::code::Code;

pub mod logical;
pub mod movement;
pub mod repetition;

pub use logical::{always, and, if_, never, or};
pub use movement::next;
pub use repetition::{until, while_any};

/// A composable predicate over a [`Code`] cursor
///
/// Cloning is cheap: clones share the same underlying function, so a rule can
/// be referenced from as many places in a grammar as needed.
///
/// Matchers are reference counted with [`Rc`], so they are neither `Send`
/// nor `Sync` and a grammar stays on the thread that built it. To parse on
/// several threads, build the grammar once per thread. Each [`Code`] owns
/// its own tree, so parses never share state.
#[derive(Clone)]
pub struct Matcher<'a> {
    func: Rc<dyn Fn(&mut Code) -> bool + 'a>,
}

impl<'a> Matcher<'a> {
    pub fn new(func: impl Fn(&mut Code) -> bool + 'a) -> Self {
        Matcher {
            func: Rc::new(func),
        }
    }

    pub fn run(&self, code: &mut Code) -> bool {
        (self.func)(code)
    }

    /// Fail straight away at the end of the input instead of running
    pub fn more(self) -> Self {
        Matcher::new(move |c| c.more() && self.run(c))
    }
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher")
    }
}

/// Match a literal string
pub fn s<'a>(lit: &str) -> Matcher<'a> {
    let lit = lit.to_string();
    Matcher::new(move |c| c.matches(&lit))
}

/// Match whatever string `slot` holds when the matcher runs
///
/// Pairs with [`Matcher::grab`] for back references such as a closing quote
/// that must equal the opening one.
pub fn s_ref<'a>(slot: &'a RefCell<String>) -> Matcher<'a> {
    Matcher::new(move |c| c.matches(&slot.borrow()))
}

/// Match one code point that is any of the characters of `set`
pub fn s_or<'a>(set: &str) -> Matcher<'a> {
    let set: Vec<char> = set.chars().collect();
    f(move |ch| set.contains(&ch))
}

/// Match one code point accepted by `pred`
pub fn f<'a>(pred: impl Fn(char) -> bool + 'a) -> Matcher<'a> {
    Matcher::new(move |c| c.match_char(&pred)).more()
}

/// Test for a literal string without consuming it
pub fn eq<'a>(lit: &str) -> Matcher<'a> {
    let lit = lit.to_string();
    Matcher::new(move |c| c.equal(&lit))
}

/// Test the current code point against `pred` without consuming it
pub fn eq_f<'a>(pred: impl Fn(char) -> bool + 'a) -> Matcher<'a> {
    Matcher::new(move |c| c.peek().is_some_and(&pred))
}

/// Match a regular expression anchored at the cursor
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression. A broken pattern is
/// a grammar bug, not something to recover from while parsing.
pub fn regex<'a>(pattern: &str) -> Matcher<'a> {
    let re = Regex::new(&format!("^(?:{pattern})"))
        .unwrap_or_else(|err| panic!("invalid pattern {pattern:?}: {err}"));
    Matcher::new(move |c| match re.find(c.tail()) {
        Some(found) => {
            let len = found.end();
            c.advance(len);
            true
        }
        None => false,
    })
}
