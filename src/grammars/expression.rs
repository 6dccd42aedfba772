//! Integer arithmetic with `+`, `*` and parentheses
//!
//! ```text
//! expr   := term "+" expr | term
//! term   := factor "*" term | factor
//! factor := "(" expr ")" | digits
//! ```
//!
//! Both operators are parsed right-associative, which does not change the
//! value of a sum or a product. Blanks are allowed around operators and
//! parentheses.

use crate::ast::{binarize, Node, ROOT};
use crate::matcher::{and, f, or, s, s_or, Matcher};
use crate::recursion::Recursive;

fn blanks<'a>() -> Matcher<'a> {
    s_or(" \t").zero_to_many()
}

fn op<'a>(symbol: &str) -> Matcher<'a> {
    and([blanks(), s(symbol).leaf("BinExpr"), blanks()])
}

/// The expression grammar. Values become `Value` leaves and operators
/// `BinExpr` nodes holding their two operands. A value that does not fit
/// an `i64` does not match.
pub fn expression<'a>() -> Matcher<'a> {
    let term = Recursive::new();
    let expr = Recursive::new();

    let value = f(|ch| ch.is_ascii_digit())
        .one_to_many()
        .parses::<i64>()
        .leaf("Value");
    let factor = or([
        and([s("("), blanks(), expr.matcher(), blanks(), s(")")]).undo(),
        value,
    ]);

    let term = term.bind(or([
        binarize(factor.clone(), op("*"), term.matcher()).undo(),
        factor,
    ]));
    let expr = expr.bind(or([
        binarize(term.clone(), op("+"), expr.matcher()).undo(),
        term,
    ]));

    and([blanks(), expr, blanks()]).undo()
}

/// Compute the value of a tree built by [`expression`]
///
/// A root node sums its children. Arithmetic wraps on overflow.
pub fn evaluate(node: &Node) -> i64 {
    if node.kind == ROOT {
        return node
            .children
            .iter()
            .fold(0, |sum, child| sum.wrapping_add(evaluate(child)));
    }
    match node.text() {
        "+" => evaluate(node.left()).wrapping_add(evaluate(node.right())),
        "*" => evaluate(node.left()).wrapping_mul(evaluate(node.right())),
        text => text.parse().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::Style;
    use crate::grammars::parse;

    fn inline(src: &str) -> String {
        let tree = parse(&expression(), src).unwrap();
        tree.print(Style::ShortInline).unwrap()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(inline("2+3"), "Root [ BinExpr + [ Value 2, Value 3 ] ]");
        assert_eq!(
            inline("2+3*4"),
            "Root [ BinExpr + [ Value 2, BinExpr * [ Value 3, Value 4 ] ] ]"
        );
        assert_eq!(
            inline("2*3+4"),
            "Root [ BinExpr + [ BinExpr * [ Value 2, Value 3 ], Value 4 ] ]"
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            inline("2*(3+4)*5"),
            "Root [ BinExpr * [ Value 2, BinExpr * [ BinExpr + [ Value 3, Value 4 ], Value 5 ] ] ]"
        );
    }

    #[test]
    fn test_multi_digit_values_and_blanks() {
        assert_eq!(
            inline(" 12 * ( 30 + 4 ) "),
            "Root [ BinExpr * [ Value 12, BinExpr + [ Value 30, Value 4 ] ] ]"
        );
    }

    #[test]
    fn test_evaluate() {
        for (src, value) in [("6+5*(4+3)*2", 76), ("2*(3+4)*5", 70), ("7", 7), ("10*10+1", 101)] {
            let tree = parse(&expression(), src).unwrap();
            assert_eq!(evaluate(&tree), value, "{src}");
        }
    }

    #[test]
    fn test_values_must_fit_i64() {
        assert!(parse(&expression(), "99999999999999999999").is_none());
        assert!(parse(&expression(), "1+99999999999999999999").is_none());

        let tree = parse(&expression(), "9223372036854775807").unwrap();
        assert_eq!(evaluate(&tree), i64::MAX);
    }

    #[test]
    fn test_incomplete_input() {
        for src in ["", "2+", "(2", "2*)", "+"] {
            assert!(parse(&expression(), src).is_none(), "{src}");
        }
    }
}
