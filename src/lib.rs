//! # knit
//!
//! Parser combinators that build a syntax tree while they match.
//!
//! Grammars are plain values: [`Matcher`]s composed with [`and`], [`or`] and
//! the quantifier methods, run against a [`Code`] cursor. The same matchers
//! carry the instructions for building the tree ([`Matcher::leaf`],
//! [`Matcher::group`], [`binarize`], ...) and for pulling tokens out
//! ([`Matcher::grab`] and friends).
//!
//! ```text
//! let letters = f(char::is_alphabetic).leaf("L").one_to_many();
//! let mut code = Code::new("ab");
//! assert!(code.run(&letters));
//! assert_eq!(code.into_tree().print(Style::ShortInline)?, "Root [ L a, L b ]");
//! ```
//!
//! Nothing rewinds implicitly. A failing sequence leaves the cursor and the
//! tree wherever it stopped; backtracking points are made explicit with
//! [`Matcher::rewind_on_failure`] and [`Matcher::undo`].
//!
//! Grammars hold `Rc`s and are meant to be built and used on one thread.

pub mod ast;
pub mod capture;
pub mod code;
pub mod formats;
pub mod grammars;
pub mod matcher;
pub mod recursion;
pub mod util;

pub use ast::{binarize, Node, Visitor};
pub use code::{Code, Mark, Token};
pub use formats::{FormatError, FormatRegistry, Style};
pub use matcher::{
    always, and, eq, eq_f, f, if_, never, next, or, regex, s, s_or, s_ref, until, while_any,
    Matcher,
};
pub use recursion::Recursive;
