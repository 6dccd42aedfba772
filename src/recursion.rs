//! Deferred rules for recursive grammars
//!
//! A rule that refers to itself (or to a rule defined after it) cannot be
//! built before it exists. [`Recursive`] is a slot that can be referenced
//! first and filled in later:
//!
//! ```text
//! let expr = Recursive::new();
//! let factor = or([and([s("("), expr.matcher(), s(")")]), digit]);
//! let grammar = expr.bind(or([binarize(factor.clone(), s("+").leaf("Op"), expr.matcher()).undo(), factor]));
//! ```
//!
//! Binding has to happen before the first match. Matchers from
//! [`Recursive::matcher`] hold the slot weakly, so a self-referencing rule
//! does not keep itself alive. The slot lives as long as the handle or the
//! matcher returned by [`Recursive::bind`]; a grammar returned from a
//! function must therefore be built from the bound matchers. With mutual
//! recursion, use the bound matcher of one rule inside the other.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::matcher::Matcher;

#[derive(Debug, Clone, Default)]
pub struct Recursive<'a> {
    slot: Rc<OnceCell<Matcher<'a>>>,
}

impl<'a> Recursive<'a> {
    pub fn new() -> Self {
        Recursive {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// A matcher that runs whatever gets bound to this slot
    ///
    /// # Panics
    ///
    /// The returned matcher panics when run before [`Recursive::bind`] was
    /// called, or after the handle and every bound matcher were dropped.
    pub fn matcher(&self) -> Matcher<'a> {
        let slot = Rc::downgrade(&self.slot);
        Matcher::new(move |c| {
            let Some(slot) = slot.upgrade() else {
                panic!("recursive rule used after its grammar was dropped");
            };
            let Some(rule) = slot.get() else {
                panic!("recursive rule used before it was bound");
            };
            rule.run(c)
        })
    }

    /// Fill the slot. The returned matcher runs the rule and keeps the slot
    /// alive.
    ///
    /// # Panics
    ///
    /// Panics if the slot was already bound.
    pub fn bind(&self, rule: Matcher<'a>) -> Matcher<'a> {
        if self.slot.set(rule).is_err() {
            panic!("recursive rule bound twice");
        }
        tracing::trace!("recursive rule bound");
        let slot = Rc::clone(&self.slot);
        Matcher::new(move |c| slot.get().is_some_and(|rule| rule.run(c)))
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }
}
