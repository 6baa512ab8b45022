//! Test-File Classifier
//!
//! Decides whether a document is a syntax test file, and classifies single
//! lines of such a document against its declared comment token.

use crate::syntest::grammar::{
    parse_assertion_line, parse_declaration_line, AssertionLine, ColRange, TokenPair,
};
use crate::syntest::host::{Region, TextView};
use std::path::Path;

/// File name prefix that marks a saved document as a syntax test.
pub const TEST_FILE_PREFIX: &str = "syntax_test_";

/// Comment tokens declared on the first line of the document.
pub fn syntax_test_tokens<V: TextView + ?Sized>(view: &V) -> TokenPair {
    let first_line = view.line(0);
    parse_declaration_line(&view.substr(first_line))
}

/// Saved documents are judged by file name alone; unsaved drafts by their
/// declaration line.
pub fn is_syntax_test_file<V: TextView + ?Sized>(view: &V) -> bool {
    match view.file_name() {
        Some(path) => has_test_file_name(path),
        None => syntax_test_tokens(view).is_declared(),
    }
}

fn has_test_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with(TEST_FILE_PREFIX))
        .unwrap_or(false)
}

/// One line of a syntax test file, as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertionLineDetails {
    /// Present when the line starts with the comment token.
    pub comment: Option<AssertionLine>,
    pub line_region: Region,
}

impl AssertionLineDetails {
    pub fn is_comment_line(&self) -> bool {
        self.comment.is_some()
    }

    pub fn colrange(&self) -> Option<ColRange> {
        self.comment.and_then(|line| line.colrange)
    }
}

/// Parse the line containing `pos`.
///
/// Returns `None` when the document is not a syntax test file or its first
/// line declares no comment token, since there is nothing to parse against.
pub fn assertion_line_details<V: TextView + ?Sized>(
    view: &V,
    pos: usize,
) -> Option<AssertionLineDetails> {
    if !is_syntax_test_file(view) {
        return None;
    }
    let start_token = syntax_test_tokens(view).start?;
    let line_region = view.line(pos);
    let text = view.substr(line_region);
    Some(AssertionLineDetails {
        comment: parse_assertion_line(&text, &start_token),
        line_region,
    })
}

/// Whether the line at `pos` is an assertion line.
///
/// With `must_contain_assertion` unset, a comment line that has no assertion
/// yet also counts, which keeps key bindings active while one is being typed.
pub fn is_syntax_test_line<V: TextView + ?Sized>(
    view: &V,
    pos: usize,
    must_contain_assertion: bool,
) -> bool {
    match assertion_line_details(view, pos) {
        Some(details) if details.is_comment_line() => {
            !must_contain_assertion || details.colrange().is_some()
        }
        _ => false,
    }
}
