//! Quantifiers and scanning
//!
//! None of these rewind. `min(2)` over input that matches once reports
//! failure with that one match still consumed.
//!
//! A receiver that can succeed without consuming anything must not be
//! repeated unconditionally: `zero_to_many` over it never terminates. The
//! engine does not guard against this; it is a grammar bug.

use super::{or, Matcher};

/// Consume code points one by one until any of `stop` matches
///
/// `stop` is tested before every step and is expected not to consume
/// (use [`eq`](super::eq) rather than [`s`](super::s)). At least one code
/// point must be consumed.
pub fn until<'a>(stop: impl IntoIterator<Item = Matcher<'a>>) -> Matcher<'a> {
    or(stop).not().next().one_to_many()
}

/// Consume code points one by one for as long as any of `cont` matches
///
/// Like [`until`], `cont` is a test, and one code point is consumed per
/// round whatever the length of the pattern that matched.
pub fn while_any<'a>(cont: impl IntoIterator<Item = Matcher<'a>>) -> Matcher<'a> {
    or(cont).next().one_to_many()
}

impl<'a> Matcher<'a> {
    /// Apply the receiver until it fails; succeed if it matched at least
    /// `n` times
    pub fn min(self, n: usize) -> Self {
        Matcher::new(move |c| {
            let mut count = 0;
            while self.run(c) {
                count += 1;
            }
            count >= n
        })
    }

    /// Regex `*`
    pub fn zero_to_many(self) -> Self {
        self.min(0)
    }

    /// Regex `+`
    pub fn one_to_many(self) -> Self {
        self.min(1)
    }

    /// Regex `?`
    pub fn zero_to_one(self) -> Self {
        self.force_true()
    }

    /// Find the next occurrence: try the receiver, and on failure skip one
    /// code point and try again, until it matches or the input runs out
    pub fn scan(self) -> Self {
        Matcher::new(move |c| loop {
            if self.run(c) {
                return true;
            }
            if c.at_end() {
                return false;
            }
            c.next();
        })
    }
}
