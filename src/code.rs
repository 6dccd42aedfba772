//! The text cursor every matcher runs against
//!
//! A [`Code`] owns the source text, the current scan position (a byte offset
//! plus 1-based row and column) and the AST being built while matching.
//! Positions only ever move forward one code point at a time, so the row and
//! column stay correct even in the middle of a multi-byte literal.
//!
//! [`Mark`]s are plain copies of the position and can be taken and restored
//! at any time; restoring a mark is how backtracking is done.

use serde::Serialize;

use crate::ast::building::Builder;
use crate::ast::Node;
use crate::matcher::Matcher;

/// A snapshot of the cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark {
    pos: usize,
    row: usize,
    col: usize,
}

impl Mark {
    /// Byte offset into the source
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line number
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based column, counted in code points
    pub fn col(&self) -> usize {
        self.col
    }
}

/// A span of source text together with the position where it starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub text: String,
    pub pos: usize,
    pub row: usize,
    pub col: usize,
}

impl Token {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Source text plus scan state for one parse
#[derive(Debug)]
pub struct Code {
    src: String,
    pos: usize,
    row: usize,
    col: usize,
    pub(crate) ast: Builder,
}

impl Code {
    pub fn new(src: impl Into<String>) -> Self {
        Code {
            src: src.into(),
            pos: 0,
            row: 1,
            col: 1,
            ast: Builder::new(),
        }
    }

    /// Run a matcher against the current position
    pub fn run(&mut self, matcher: &Matcher<'_>) -> bool {
        matcher.run(self)
    }

    /// Find every occurrence of `matcher` from the current position to the
    /// end of the input. Returns true if at least one occurrence matched.
    ///
    /// `matcher` must consume input when it succeeds, otherwise this never
    /// reaches the end.
    pub fn scan(&mut self, matcher: &Matcher<'_>) -> bool {
        let next = matcher.clone().scan();
        let mut found = false;
        while next.run(self) {
            found = true;
        }
        found
    }

    /// Current byte offset
    pub fn here(&self) -> usize {
        self.pos
    }

    /// Everything from the current position to the end
    pub fn tail(&self) -> &str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    /// The source between two byte offsets
    pub fn take(&self, from: usize, to: usize) -> &str {
        self.src.get(from..to).unwrap_or_default()
    }

    pub fn source(&self) -> &str {
        &self.src
    }

    /// Whether there is anything left to scan
    pub fn more(&self) -> bool {
        self.pos < self.src.len()
    }

    pub fn at_end(&self) -> bool {
        !self.more()
    }

    /// True if the remaining text starts with `s`. Never moves.
    pub fn equal(&self, s: &str) -> bool {
        !s.is_empty() && self.tail().starts_with(s)
    }

    /// Consume `s` if the remaining text starts with it
    pub fn matches(&mut self, s: &str) -> bool {
        if !self.equal(s) {
            return false;
        }
        self.advance(s.len());
        true
    }

    /// Consume one code point if `pred` accepts it. The predicate is never
    /// called at the end of the input.
    pub fn match_char(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.step(ch);
                true
            }
            _ => false,
        }
    }

    /// The code point under the cursor
    pub fn peek(&self) -> Option<char> {
        self.tail().chars().next()
    }

    /// Move past the current code point. Does nothing at the end.
    pub fn next(&mut self) {
        if let Some(ch) = self.peek() {
            self.step(ch);
        }
    }

    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            row: self.row,
            col: self.col,
        }
    }

    pub fn restore(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.row = mark.row;
        self.col = mark.col;
    }

    /// The text between two marks, positioned at `from`
    pub fn token(&self, from: Mark, to: Mark) -> Token {
        Token {
            text: self.take(from.pos, to.pos).to_string(),
            pos: from.pos,
            row: from.row,
            col: from.col,
        }
    }

    /// The node new leaves are currently attached to
    pub fn tree(&self) -> &Node {
        self.ast.current()
    }

    /// Close every scope left open by `enter` and hand back the root node
    pub fn into_tree(self) -> Node {
        self.ast.into_root()
    }

    /// Advance over `len` bytes of source, one code point at a time
    pub(crate) fn advance(&mut self, len: usize) {
        let end = (self.pos + len).min(self.src.len());
        while self.pos < end {
            self.next();
        }
    }

    fn step(&mut self, ch: char) {
        self.col += 1;
        if ch == '\n' {
            self.row += 1;
            self.col = 1;
        }
        self.pos = (self.pos + ch.len_utf8()).min(self.src.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        let code = Code::new("abc");

        assert!(!code.equal(""));
        assert!(code.equal("a"));
        assert!(code.equal("ab"));
        assert!(code.equal("abc"));
        assert!(!code.equal("abcd"));
        assert!(!code.equal("x"));
        assert_eq!(code.here(), 0);
    }

    #[test]
    fn test_matches() {
        let mut code = Code::new("abcd");

        assert!(!code.matches(""));
        assert!(code.matches("a"));
        assert!(code.matches("b"));
        assert!(!code.matches("x"));
        assert!(code.matches("cd"));
        assert!(!code.matches(""));
        assert!(code.at_end());
    }

    #[test]
    fn test_match_char() {
        let mut code = Code::new("ab");

        assert!(!code.match_char(char::is_numeric));
        assert!(code.match_char(char::is_alphabetic));
        assert!(!code.match_char(char::is_numeric));
        assert!(code.match_char(char::is_alphabetic));
        assert!(!code.match_char(|_| true));
    }

    #[test]
    fn test_mark_and_restore() {
        let mut code = Code::new("a");

        let a = code.mark();
        assert!(code.matches("a"));
        let b = code.mark();

        assert_eq!((a.pos(), a.row(), a.col()), (0, 1, 1));
        assert_eq!((b.pos(), b.row(), b.col()), (1, 1, 2));

        code.restore(a);
        assert!(code.matches("a"));
    }

    #[test]
    fn test_next_is_code_point_aware() {
        let mut code = Code::new("a世c");

        let a = code.mark();
        code.next();
        let b = code.mark();
        code.next();
        let c = code.mark();
        code.next();
        let d = code.mark();

        assert_eq!(code.token(a, b).text, "a");
        assert_eq!(code.token(b, c).text, "世");
        assert_eq!(code.token(c, d).text, "c");
        assert_eq!((c.pos(), c.col()), (4, 3));
    }

    #[test]
    fn test_next_past_end_is_noop() {
        let mut code = Code::new("a");
        code.next();
        code.next();

        assert_eq!(code.here(), 1);
        assert_eq!(code.mark().col(), 2);
    }

    #[test]
    fn test_rows_advance_inside_literal() {
        let mut code = Code::new("ab\ncdef\ngh");

        let a = code.mark();
        assert!(code.matches("ab\ncd"));
        let b = code.mark();
        assert!(code.matches("ef\ngh"));

        assert_eq!(
            code.token(a, b),
            Token {
                text: "ab\ncd".to_string(),
                pos: 0,
                row: 1,
                col: 1
            }
        );
        assert_eq!((b.pos(), b.row(), b.col()), (5, 2, 3));
        assert_eq!(code.mark().row(), 3);
    }
}
