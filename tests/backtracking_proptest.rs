//! Property-based tests for cursor and tree rollback

use knit::{and, f, never, next, s, Code};
use proptest::prelude::*;

/// Count what a cursor should report after scanning all of `src`
fn expected_end(src: &str) -> (usize, usize, usize) {
    let row = 1 + src.matches('\n').count();
    let tail = src.rsplit('\n').next().unwrap_or_default();
    (src.len(), row, tail.chars().count() + 1)
}

proptest! {
    #[test]
    fn test_next_steps_one_code_point(src in "\\PC{0,40}(\n\\PC{0,10}){0,3}") {
        let mut code = Code::new(src.as_str());
        let mut steps = 0;
        while code.run(&next()) {
            steps += 1;
        }
        let end = code.mark();
        prop_assert_eq!(steps, src.chars().count());
        prop_assert_eq!((end.pos(), end.row(), end.col()), expected_end(&src));
    }

    #[test]
    fn test_undo_restores_cursor_and_tree(src in "[ab]{0,12}", prefix in 0usize..4) {
        let mut code = Code::new(src.as_str());
        let lead = f(|_| true).leaf("P");
        for _ in 0..prefix {
            code.run(&lead);
        }
        let mark = code.mark();
        let before = code.tree().clone();

        let attempt = and([
            f(|ch| ch == 'a').leaf("A").zero_to_many(),
            f(|ch| ch == 'b').leaf("B").enter(),
            f(|_| true).leaf("C").zero_to_many(),
            never(),
        ])
        .undo();
        prop_assert!(!code.run(&attempt));

        prop_assert_eq!(code.mark(), mark);
        prop_assert_eq!(code.tree(), &before);
    }

    #[test]
    fn test_rewind_never_moves(src in "[a-c]{0,12}") {
        let mut code = Code::new(src.as_str());
        let m = and([s("a").zero_to_many(), s("b"), s("c")]).rewind();
        code.run(&m);
        prop_assert_eq!(code.here(), 0);
    }

    #[test]
    fn test_group_failure_attaches_nothing(src in "[ab]{0,8}") {
        let mut code = Code::new(src.as_str());
        let m = and([f(|_| true).leaf("X").one_to_many(), never()]).group("G");
        prop_assert!(!code.run(&m));
        prop_assert!(code.tree().children.is_empty());
    }

    #[test]
    fn test_repetition_at_end_is_repeatable(src in "[ab]{0,8}") {
        let mut code = Code::new(src.as_str());
        let m = f(|_| true).zero_to_many();
        prop_assert!(code.run(&m));
        prop_assert!(code.at_end());
        prop_assert!(code.run(&m));
        prop_assert!(code.at_end());
    }
}
