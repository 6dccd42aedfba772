//! Ready-made matchers for common lexical shapes
//!
//! All of them are state-neutral on failure: the cursor is back where it
//! started and nothing is captured.

use crate::matcher::{always, and, eq, f, if_, next, or, s, s_or, Matcher};
use crate::recursion::Recursive;

/// A string delimited by `quote`
///
/// A backslash escapes the quote and nothing else, so `"a\b"` is a complete
/// string. A line break before the closing quote fails the match.
pub fn string<'a>(quote: &str) -> Matcher<'a> {
    let escaped = s(&format!("\\{quote}"));
    let plain = and([or([eq(quote), eq("\n")]).not(), next()]);
    and([s(quote), or([escaped, plain]).zero_to_many(), s(quote)]).rewind_on_failure()
}

/// A JSON number: `-`? digits (`.` digits)? (`e`|`E` (`+`|`-`)? digits)?
pub fn number<'a>() -> Matcher<'a> {
    let digits = || f(|ch| ch.is_ascii_digit()).one_to_many();
    let fraction = if_(eq("."), and([s("."), digits()]), always());
    let exponent = if_(
        s_or("eE"),
        and([s_or("+-").zero_to_one(), digits()]),
        always(),
    );
    and([s("-").zero_to_one(), digits(), fraction, exponent]).rewind_on_failure()
}

/// A region between `open` and `close` in which the pair may nest
///
/// `tag("{", "}")` matches all of `{a{b}c}`. Line breaks are allowed.
pub fn tag<'a>(open: &str, close: &str) -> Matcher<'a> {
    let tag = Recursive::new();
    let inner = or([tag.matcher(), and([eq(close).not(), next()])]);
    tag.bind(and([s(open), inner.zero_to_many(), s(close)]).rewind_on_failure())
}
