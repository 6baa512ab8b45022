//! Key binding context queries.
//!
//! Hosts enable the syntax test key bindings by asking boolean questions
//! about the view. Every key answered here is boolean, so only the equality
//! operators are supported; anything else is left for other handlers.

use crate::syntest::classifier::{
    assertion_line_details, is_syntax_test_file, is_syntax_test_line,
};
use crate::syntest::host::TextView;

pub const LINE_ABOVE_IS_A_SYNTAX_TEST: &str = "line_above_is_a_syntax_test";
pub const CURRENT_LINE_IS_A_SYNTAX_TEST: &str = "current_line_is_a_syntax_test";
pub const FILE_CONTAINS_SYNTAX_TESTS: &str = "file_contains_syntax_tests";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextOperator {
    Equal,
    NotEqual,
    RegexMatch,
    NotRegexMatch,
    RegexContains,
    NotRegexContains,
}

/// Answer a context query, or `None` when the key or operator is not ours.
pub fn query_context<V: TextView + ?Sized>(
    view: &V,
    key: &str,
    operator: ContextOperator,
    operand: bool,
) -> Option<bool> {
    let negate = match operator {
        ContextOperator::Equal => false,
        ContextOperator::NotEqual => true,
        _ => return None,
    };
    let cursor = view.selection().start;
    let value = match key {
        LINE_ABOVE_IS_A_SYNTAX_TEST => line_above_is_a_syntax_test(view, cursor),
        CURRENT_LINE_IS_A_SYNTAX_TEST => is_syntax_test_line(view, cursor, false),
        FILE_CONTAINS_SYNTAX_TESTS => is_syntax_test_file(view),
        _ => return None,
    };
    Some((value == operand) != negate)
}

/// The cursor is on a comment line directly below a completed assertion line.
fn line_above_is_a_syntax_test<V: TextView + ?Sized>(view: &V, cursor: usize) -> bool {
    match assertion_line_details(view, cursor) {
        Some(details) if details.is_comment_line() => details
            .line_region
            .start
            .checked_sub(1)
            .map(|above| is_syntax_test_line(view, above, true))
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntest::testing::MemoryView;
    use rstest::rstest;

    const SOURCE: &str =
        "# SYNTAX TEST \"Packages/Example/Example.sublime-syntax\"\nfoo.bar\n# ^ a\n# \n";

    fn at(row: usize, col: usize) -> MemoryView {
        let view = MemoryView::new("source.example", SOURCE);
        let pos = view.point(row, col);
        view.with_cursor(pos)
    }

    #[rstest]
    #[case::below_assertion(3, 1, true)]
    #[case::below_code(2, 0, false)]
    #[case::on_code(1, 3, false)]
    fn line_above(#[case] row: usize, #[case] col: usize, #[case] expected: bool) {
        let view = at(row, col);
        assert_eq!(
            query_context(&view, LINE_ABOVE_IS_A_SYNTAX_TEST, ContextOperator::Equal, true),
            Some(expected)
        );
    }

    #[test]
    fn first_line_has_no_line_above() {
        let view = at(0, 3);
        assert_eq!(
            query_context(&view, LINE_ABOVE_IS_A_SYNTAX_TEST, ContextOperator::Equal, true),
            Some(false)
        );
    }

    #[rstest]
    #[case::assertion(2, true)]
    #[case::unfinished(3, true)]
    #[case::code(1, false)]
    fn current_line(#[case] row: usize, #[case] expected: bool) {
        let view = at(row, 0);
        assert_eq!(
            query_context(&view, CURRENT_LINE_IS_A_SYNTAX_TEST, ContextOperator::Equal, true),
            Some(expected)
        );
    }

    #[test]
    fn file_key_and_operators() {
        let view = at(1, 0);
        let query = |operator, operand| {
            query_context(&view, FILE_CONTAINS_SYNTAX_TESTS, operator, operand)
        };
        assert_eq!(query(ContextOperator::Equal, true), Some(true));
        assert_eq!(query(ContextOperator::Equal, false), Some(false));
        assert_eq!(query(ContextOperator::NotEqual, true), Some(false));
        assert_eq!(query(ContextOperator::NotEqual, false), Some(true));
        assert_eq!(query(ContextOperator::RegexMatch, true), None);
        assert_eq!(query(ContextOperator::NotRegexContains, true), None);
    }

    #[test]
    fn unknown_keys_are_not_answered() {
        let view = at(1, 0);
        assert_eq!(
            query_context(&view, "selector", ContextOperator::Equal, true),
            None
        );
    }

    #[test]
    fn plain_files_answer_false() {
        let view = MemoryView::new("source.example", "foo\n# ^ a\n# \n").with_cursor(11);
        assert_eq!(
            query_context(&view, LINE_ABOVE_IS_A_SYNTAX_TEST, ContextOperator::Equal, true),
            Some(false)
        );
        assert_eq!(
            query_context(&view, FILE_CONTAINS_SYNTAX_TESTS, ContextOperator::NotEqual, true),
            Some(true)
        );
    }
}
