//! End-to-end scenarios for the suggestion command.
//!
//! Each test builds an in-memory syntax test file with a fake scope map for
//! the tested line, types the trigger character on the assertion line, and
//! checks the resulting line and selection.

use syntest::syntest::host::{Region, TextView};
use syntest::syntest::suggest::suggest_syntax_test;
use syntest::syntest::testing::MemoryView;

const DECLARATION: &str = r#"# SYNTAX TEST "Packages/Example/Example.sublime-syntax""#;
const VARIABLE: &str = "source.example variable.other.example";
const ACCESSOR: &str = "source.example punctuation.accessor.example";
const MEMBER: &str = "source.example variable.other.member.example";
const KEYWORD: &str = "source.example keyword.control.example";

/// `foo.bar` tested by `assertion`, with the cursor at the end of the assertion line.
fn member_access(assertion: &str) -> MemoryView {
    MemoryView::new(
        "source.example",
        &format!("{DECLARATION}\nfoo.bar\n{assertion}"),
    )
    .with_scope(1, 0..3, VARIABLE)
    .with_scope(1, 3..4, ACCESSOR)
    .with_scope(1, 4..7, MEMBER)
    .with_cursor_at(2, assertion.chars().count())
}

fn selected(view: &MemoryView) -> String {
    view.substr(view.selection())
}

#[test]
fn suggests_scope_of_the_column_under_the_caret() {
    let mut view = member_access("# ");
    let suggestion = suggest_syntax_test(&mut view, '^').unwrap();

    assert_eq!(suggestion.length, 1);
    insta::assert_snapshot!(view.line_text(2), @"# ^ variable.other.example");
    assert_eq!(selected(&view), " variable.other.example");
    assert_eq!(view.selection().start, view.point(2, 3));
}

#[test]
fn typing_again_extends_the_run_and_narrows_the_scopes() {
    let mut view = member_access("# ");
    suggest_syntax_test(&mut view, '^').unwrap();

    // The scope text is selected, so the next caret replaces it.
    let suggestion = suggest_syntax_test(&mut view, '^').unwrap();
    assert_eq!(suggestion.length, 1);
    assert_eq!(suggestion.scope, "");
    assert_eq!(view.line_text(2), "# ^^ ");
    assert_eq!(selected(&view), " ");

    // The third column starts a three column member name.
    let suggestion = suggest_syntax_test(&mut view, '^').unwrap();
    assert_eq!(suggestion.length, 3);
    assert_eq!(view.line_text(2), "# ^^^^^ ");
}

#[test]
fn run_length_covers_identical_scopes() {
    let mut view = MemoryView::new("source.example", &format!("{DECLARATION}\nx foo;\n# "))
        .with_scope(1, 0..1, "source.example variable.example")
        .with_scope(1, 2..5, KEYWORD)
        .with_scope(1, 5..6, "source.example punctuation.terminator.example")
        .with_cursor_at(2, 2);

    let suggestion = suggest_syntax_test(&mut view, '^').unwrap();
    assert_eq!(suggestion.length, 3);
    insta::assert_snapshot!(view.line_text(2), @"# ^^^ keyword.control.example");
    assert_eq!(selected(&view), " keyword.control.example");
}

#[test]
fn base_scope_alone_leaves_only_carets() {
    let mut view = MemoryView::new("source.example", &format!("{DECLARATION}\nx foo;\n# "))
        .with_scope(1, 0..1, "source.example variable.example")
        .with_scope(1, 5..6, "source.example punctuation.terminator.example")
        .with_cursor_at(2, 2);

    let suggestion = suggest_syntax_test(&mut view, '^').unwrap();
    assert_eq!(suggestion.length, 3);
    assert_eq!(view.line_text(2), "# ^^^ ");
    assert_eq!(selected(&view), " ");
}

#[test]
fn start_of_comment_marker_covers_one_column() {
    let source = "// SYNTAX TEST \"Packages/Example/Example.sublime-syntax\"\nfoo bar\n// <";
    let mut view = MemoryView::new("source.example", source)
        .with_scope(1, 0..3, KEYWORD)
        .with_cursor_at(2, 4);

    let suggestion = suggest_syntax_test(&mut view, '-').unwrap();
    assert_eq!(suggestion.length, 1);
    insta::assert_snapshot!(view.line_text(2), @"// <- keyword.control.example");
    assert_eq!(selected(&view), " keyword.control.example");
}

#[test]
fn start_of_comment_marker_ignores_assertions_above() {
    let source =
        "// SYNTAX TEST \"Packages/Example/Example.sublime-syntax\"\nfoo bar\n//  ^ string\n// <";
    let mut view = MemoryView::new("source.example", source)
        .with_scope(1, 0..3, KEYWORD)
        .with_scope(1, 4..7, "source.example string.unquoted.example")
        .with_cursor_at(3, 4);

    suggest_syntax_test(&mut view, '-').unwrap();
    assert_eq!(view.line_text(3), "// <- keyword.control.example");
}

const HTML_DECLARATION: &str = r#"<!-- SYNTAX TEST "Packages/HTML/HTML.sublime-syntax" -->"#;

fn html_tag(assertion: &str, cursor_col: usize) -> MemoryView {
    MemoryView::new(
        "text.html.basic",
        &format!("{HTML_DECLARATION}\n<html>\n{assertion}"),
    )
    .with_scope(
        1,
        0..1,
        "text.html.basic meta.tag punctuation.definition.tag.begin",
    )
    .with_scope(1, 1..5, "text.html.basic meta.tag entity.name.tag")
    .with_scope(1, 5..6, "text.html.basic meta.tag punctuation.definition.tag.end")
    .with_cursor_at(2, cursor_col)
}

#[test]
fn closing_token_is_appended_at_the_end_of_the_line() {
    let mut view = html_tag("<!-- ", 5);
    let suggestion = suggest_syntax_test(&mut view, '^').unwrap();

    assert_eq!(suggestion.suffix, " -->");
    insta::assert_snapshot!(
        view.line_text(2),
        @"<!-- ^ meta.tag punctuation.definition.tag.end -->"
    );
    assert_eq!(selected(&view), " meta.tag punctuation.definition.tag.end -->");
}

#[test]
fn closing_token_is_not_duplicated() {
    let mut view = html_tag("<!--  -->", 5);
    let suggestion = suggest_syntax_test(&mut view, '^').unwrap();

    assert_eq!(suggestion.suffix, "");
    assert_eq!(
        view.line_text(2),
        "<!-- ^ meta.tag punctuation.definition.tag.end -->"
    );
    assert_eq!(selected(&view), " meta.tag punctuation.definition.tag.end");
}

#[test]
fn replaces_a_selection_before_suggesting() {
    let view = member_access("# xyz");
    let start = view.point(2, 2);
    let mut view = view.with_selection(Region::new(start, start + 3));

    suggest_syntax_test(&mut view, '^').unwrap();
    assert_eq!(view.line_text(2), "# ^ variable.other.example");
}

#[test]
fn plain_files_keep_the_typed_character() {
    let mut view = MemoryView::new("source.example", "foo\n# ").with_cursor(6);
    assert_eq!(suggest_syntax_test(&mut view, '^'), None);
    assert_eq!(view.text(), "foo\n# ^");
    assert_eq!(view.selection(), Region::new(6, 7));
}

#[test]
fn columns_past_the_tested_line_keep_the_typed_character() {
    let mut view = MemoryView::new("source.example", &format!("{DECLARATION}\nab\n#     "))
        .with_cursor_at(2, 6);
    assert_eq!(suggest_syntax_test(&mut view, '^'), None);
    assert_eq!(view.line_text(2), "#     ^");
}
