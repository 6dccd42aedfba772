//! Stepping over input and putting the cursor back

use super::{and, Matcher};

/// Consume one code point, whatever it is. Fails at the end of the input.
pub fn next<'a>() -> Matcher<'a> {
    Matcher::new(|c| {
        c.next();
        true
    })
    .more()
}

impl<'a> Matcher<'a> {
    /// Run the receiver, then consume one more code point
    pub fn next(self) -> Self {
        and([self, next()])
    }

    /// Lookahead: run the receiver and always put the cursor back where it
    /// was, returning the receiver's result
    pub fn rewind(self) -> Self {
        Matcher::new(move |c| {
            let ini = c.mark();
            let ok = self.run(c);
            c.restore(ini);
            ok
        })
    }

    /// Put the cursor back only when the receiver fails
    ///
    /// This moves the cursor only; use [`Matcher::undo`] when the receiver
    /// attaches AST nodes.
    pub fn rewind_on_failure(self) -> Self {
        Matcher::new(move |c| {
            let ini = c.mark();
            if self.run(c) {
                return true;
            }
            c.restore(ini);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Code;
    use crate::matcher::{eq, s};

    #[test]
    fn test_next() {
        let cases: Vec<(&str, bool, Matcher, &str)> = vec![
            ("", false, eq("a").next(), ""),
            ("b", true, eq("b").next(), "b"),
            ("c", false, eq("b").next(), ""),
            ("bc", true, eq("b").next(), "b"),
            ("de", true, next(), "d"),
            ("de", true, and([next(), next()]), "de"),
            ("de", true, next().next(), "de"),
            ("de", false, next().next().next(), "de"),
        ];

        for (input, ok, m, consumed) in cases {
            let mut code = Code::new(input);
            let ini = code.mark();
            assert_eq!(code.run(&m), ok, "{input}");
            assert_eq!(code.token(ini, code.mark()).text, consumed, "{input}");
        }
    }

    #[test]
    fn test_rewind_is_lookahead() {
        let mut code = Code::new("ab");
        assert!(code.run(&s("ab").rewind()));
        assert_eq!(code.here(), 0);
        assert!(!code.run(&and([s("a"), s("x")]).rewind()));
        assert_eq!(code.here(), 0);
        assert!(code.run(&and([s("a").rewind(), s("a")])));
    }

    #[test]
    fn test_rewind_on_failure() {
        let mut code = Code::new("ab");
        assert!(!code.run(&and([s("a"), s("x")]).rewind_on_failure()));
        assert_eq!(code.here(), 0);
        assert!(code.run(&and([s("a"), s("b")]).rewind_on_failure()));
        assert_eq!(code.here(), 2);
    }
}
