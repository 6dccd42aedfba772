//! Sequence, ordered choice and result forcing

use super::Matcher;

/// Run each matcher in turn, stopping at the first one that fails
///
/// Nothing is undone when a later step fails: input consumed and nodes
/// attached by the earlier steps stay where they are. Wrap the sequence in
/// [`Matcher::undo`] where that matters.
pub fn and<'a>(matchers: impl IntoIterator<Item = Matcher<'a>>) -> Matcher<'a> {
    let matchers: Vec<Matcher<'a>> = matchers.into_iter().collect();
    Matcher::new(move |c| matchers.iter().all(|m| m.run(c)))
}

/// Ordered choice: the first matcher that succeeds wins
///
/// Each alternative must leave no trace when it fails, since the next one
/// starts from wherever the previous one stopped.
pub fn or<'a>(matchers: impl IntoIterator<Item = Matcher<'a>>) -> Matcher<'a> {
    let matchers: Vec<Matcher<'a>> = matchers.into_iter().collect();
    Matcher::new(move |c| matchers.iter().any(|m| m.run(c)))
}

/// Run `then` if `cond` matches, `otherwise` if it does not
pub fn if_<'a>(cond: Matcher<'a>, then: Matcher<'a>, otherwise: Matcher<'a>) -> Matcher<'a> {
    Matcher::new(move |c| {
        if cond.run(c) {
            then.run(c)
        } else {
            otherwise.run(c)
        }
    })
}

/// Always succeeds without consuming anything
pub fn always<'a>() -> Matcher<'a> {
    Matcher::new(|_| true)
}

/// Always fails without consuming anything
pub fn never<'a>() -> Matcher<'a> {
    Matcher::new(|_| false)
}

impl<'a> Matcher<'a> {
    /// Invert the result. Only sound when the receiver leaves no side
    /// effects behind when it fails.
    pub fn not(self) -> Self {
        Matcher::new(move |c| !self.run(c))
    }

    /// Run for the side effects and report success regardless
    pub fn force_true(self) -> Self {
        Matcher::new(move |c| {
            self.run(c);
            true
        })
    }

    /// Run for the side effects and report failure regardless
    pub fn force_false(self) -> Self {
        Matcher::new(move |c| {
            self.run(c);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Code;
    use crate::matcher::s;

    fn check(input: &str, m: Matcher<'_>) -> bool {
        Code::new(input).run(&m)
    }

    #[test]
    fn test_and() {
        assert!(check("ab", and([s("a"), s("b")])));
        assert!(!check("ax", and([s("a"), s("b")])));
        assert!(check("", and(Vec::<Matcher>::new())));
    }

    #[test]
    fn test_and_does_not_rewind() {
        let mut code = Code::new("ax");
        assert!(!code.run(&and([s("a"), s("b")])));
        assert_eq!(code.here(), 1);
    }

    #[test]
    fn test_or() {
        assert!(check("a", or([s("a"), s("b")])));
        assert!(check("b", or([s("a"), s("b")])));
        assert!(!check("c", or([s("a"), s("b")])));
        assert!(!check("a", or(Vec::<Matcher>::new())));
    }

    #[test]
    fn test_or_is_ordered() {
        let mut code = Code::new("abc");
        assert!(code.run(&or([s("a"), s("abc")])));
        assert_eq!(code.here(), 1);
    }

    #[test]
    fn test_forcing_and_negation() {
        assert!(check("a", s("a").force_true()));
        assert!(check("b", s("a").force_true()));
        assert!(check("", always()));
        assert!(!check("a", s("a").force_false()));
        assert!(!check("b", s("a").force_false()));
        assert!(!check("", never()));
        assert!(!check("a", s("a").not()));
        assert!(check("b", s("a").not()));
    }

    #[test]
    fn test_force_false_keeps_side_effects() {
        let mut code = Code::new("ab");
        assert!(!code.run(&s("a").force_false()));
        assert_eq!(code.here(), 1);
    }

    #[test]
    fn test_if() {
        assert!(check(".", if_(s("."), always(), never())));
        assert!(!check("@", if_(s("."), always(), never())));
        assert!(check(".a", if_(s("."), s("a"), s("b"))));
        assert!(check("b", if_(s("."), s("a"), s("b"))));
    }
}
