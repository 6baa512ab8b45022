//! Assertion Grammar
//!
//! Pure parsing of the two kinds of lines a syntax test file cares about:
//!
//! - The declaration line (always the first line), which names the comment
//!   token used by assertions and, for block comment styles, its closing token:
//!
//!   ```text
//!   <!-- SYNTAX TEST "Packages/HTML/HTML.sublime-syntax" -->
//!   ```
//!
//! - Assertion lines, which start with the comment token (after optional
//!   indentation) followed by either `<-` or a run of carets:
//!
//!   ```text
//!   // <- keyword.control
//!   //    ^^^^ entity.name.function
//!   ```
//!
//! Nothing here fails. A line that does not have the expected shape simply
//! yields `None`.
//!
//! All columns are character offsets, not byte offsets.

use once_cell::sync::Lazy;
use regex::Regex;

/// First lines this long or longer are never treated as declarations.
pub const MAX_DECLARATION_LEN: usize = 1000;

static DECLARATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(\S+)\s+SYNTAX TEST\s+"[^"]+"\s*(\S+)?$"#).unwrap());

static ASSERTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(?:(<-)|(\^+))").unwrap());

/// Comment tokens declared by the first line of a syntax test file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenPair {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TokenPair {
    pub fn is_declared(&self) -> bool {
        self.start.is_some()
    }
}

/// Parse the declaration line, returning an empty pair when it does not match.
pub fn parse_declaration_line(text: &str) -> TokenPair {
    if text.chars().count() >= MAX_DECLARATION_LEN {
        return TokenPair::default();
    }
    match DECLARATION_REGEX.captures(text) {
        Some(caps) => TokenPair {
            start: caps.get(1).map(|m| m.as_str().to_string()),
            end: caps.get(2).map(|m| m.as_str().to_string()),
        },
        None => TokenPair::default(),
    }
}

/// A half-open column range on a line.
///
/// An empty range is the `<-` form and points at a single column. A non-empty
/// range is the caret form and covers every column under a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColRange {
    pub start: usize,
    pub end: usize,
}

impl ColRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Columns occupied by the comment token at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMarker {
    pub start: usize,
    pub end: usize,
}

/// A line that starts with the comment token, with its assertion if one was found.
///
/// `colrange` is `None` for a comment line that carries no assertion yet,
/// which is normal while the line is being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertionLine {
    pub marker: CommentMarker,
    pub colrange: Option<ColRange>,
}

/// Parse one line against the document's start token.
///
/// Returns `None` when the line does not start with `start_token`.
pub fn parse_assertion_line(text: &str, start_token: &str) -> Option<AssertionLine> {
    if start_token.is_empty() {
        return None;
    }
    let indent = text.len() - text.trim_start().len();
    if !text[indent..].starts_with(start_token) {
        return None;
    }
    let token_end = indent + start_token.len();
    let marker = CommentMarker {
        start: char_col(text, indent),
        end: char_col(text, token_end),
    };

    let rest = &text[token_end..];
    let colrange = ASSERTION_REGEX.captures(rest).and_then(|caps| {
        if caps.get(1).is_some() {
            Some(ColRange::new(marker.start, marker.start))
        } else {
            caps.get(2).map(|carets| {
                let start = marker.end + char_col(rest, carets.start());
                ColRange::new(start, start + carets.as_str().chars().count())
            })
        }
    });

    Some(AssertionLine { marker, colrange })
}

/// Whether `text` is made of carets only, e.g. a selected slice of a caret run.
pub fn is_caret_run(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == '^')
}

fn char_col(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}
