//! Scope-Suggestion Engine
//!
//! Suggests the assertion to write at the cursor. Typing the trigger
//! character (normally `^`) on an assertion line runs [`suggest_syntax_test`],
//! which replaces the keystroke with a caret run covering every following
//! column of the tested line that shares the scope of the column under the
//! cursor, followed by the scopes those columns have in common:
//!
//! ```text
//! foo.bar
//! #   ^^^ variable.other.member.example
//! ```
//!
//! The scope work itself lives in [`infer_scopes`], which only needs a
//! [`ScopeSource`] and can be driven by a fake scope map.
//!
//! Extending an assertion
//!
//!     After a suggestion the selection covers the inserted scope text, so
//!     typing the trigger character again replaces it, lengthens the caret run
//!     by one column, and suggests again. The second suggestion keeps only the
//!     scopes shared by every column now under the carets.
//!
//! The `<-` form
//!
//!     When the assertion line uses `<-`, the assertion points at the column of
//!     the comment token itself, so exactly one column is considered.

use crate::syntest::classifier::{is_syntax_test_file, syntax_test_tokens};
use crate::syntest::grammar::ColRange;
use crate::syntest::host::{EditView, Region, ScopeSource};
use crate::syntest::walker::collect_assertion_run;

/// Character inserted by the suggestion command when none is given.
pub const DEFAULT_CHARACTER: char = '^';

/// Outcome of the scope analysis for one suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeInference {
    /// Number of columns the assertion should cover.
    pub length: usize,
    /// Distinct scope names that took part, the reference scope first.
    pub candidates: Vec<String>,
    /// Scopes shared by every candidate, without the document's base scope.
    pub shared: Vec<String>,
}

impl ScopeInference {
    /// The scopes to write after the carets.
    pub fn scope_text(&self) -> String {
        self.shared.join(" ")
    }
}

/// Analyse the tested line starting at column `col`.
///
/// With `single_column` set only that column is considered. `merge` is the
/// caret range of the assertion being extended; the scopes under it join the
/// candidate set. Returns `None` when `col` lies past the end of the tested line.
pub fn infer_scopes<S: ScopeSource + ?Sized>(
    source: &S,
    tested_line: Region,
    col: usize,
    single_column: bool,
    merge: Option<ColRange>,
) -> Option<ScopeInference> {
    let start = tested_line.start + col;
    if start > tested_line.end {
        return None;
    }

    let reference = source.scope_name(start);
    let length = if single_column {
        1
    } else {
        1 + (start + 1..=tested_line.end)
            .take_while(|&pos| source.scope_name(pos) == reference)
            .count()
    };

    let mut candidates = vec![reference];
    if let Some(range) = merge {
        let from = tested_line.start + range.start;
        let to = (tested_line.start + range.end).min(tested_line.end + 1);
        for pos in from..to {
            let scope = source.scope_name(pos);
            if !candidates.contains(&scope) {
                candidates.push(scope);
            }
        }
    }

    let mut shared = shared_scopes(source, &candidates);
    let base_scope = source.scope_name(0);
    if let (Some(first), Some(base)) = (shared.first(), base_scope.split_whitespace().next()) {
        if first == base {
            shared.remove(0);
        }
    }

    Some(ScopeInference {
        length,
        candidates,
        shared,
    })
}

/// Scopes of the first candidate that every candidate matches.
pub fn shared_scopes<S: ScopeSource + ?Sized>(source: &S, candidates: &[String]) -> Vec<String> {
    let Some(primary) = candidates.first() else {
        return Vec::new();
    };
    primary
        .split_whitespace()
        .filter(|scope| {
            candidates
                .iter()
                .all(|candidate| source.score_selector(candidate, scope) > 0)
        })
        .map(str::to_string)
        .collect()
}

/// Text inserted by one suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub character: char,
    pub length: usize,
    pub scope: String,
    /// Closing comment token, with its leading space, or empty.
    pub suffix: String,
}

impl Suggestion {
    /// The caret run followed by the annotation tail.
    pub fn text(&self) -> String {
        let mut text: String = std::iter::repeat(self.character).take(self.length).collect();
        text.push_str(&self.tail());
        text
    }

    /// Everything after the caret run.
    pub fn tail(&self) -> String {
        format!(" {}{}", self.scope, self.suffix)
    }
}

/// Run the suggestion command on the view's primary selection.
///
/// Returns the inserted suggestion, or `None` when the view is not a syntax
/// test file or no suggestion applies; the typed character stays in place then.
pub fn suggest_syntax_test<V>(view: &mut V, character: char) -> Option<Suggestion>
where
    V: EditView + ScopeSource + ?Sized,
{
    let selection = view.selection();
    view.replace(selection, character.encode_utf8(&mut [0; 4]));
    let insert_at = selection.start;
    let typed = Region::new(insert_at, insert_at + 1);
    view.set_selection(typed);

    if !is_syntax_test_file(view) {
        tracing::debug!("not a syntax test file, leaving the typed character");
        return None;
    }
    let run = collect_assertion_run(view, insert_at)?;

    // The closing token is only added when nothing follows the cursor,
    // otherwise it is already on the line.
    let suffix = match (syntax_test_tokens(view).end, run.nearest()) {
        (Some(end_token), Some(nearest)) if typed.end == nearest.line_region.end => {
            format!(" {end_token}")
        }
        _ => String::new(),
    };

    let nearest_colrange = run.nearest().and_then(|nearest| nearest.colrange());
    let (col, single_column, merge) = match nearest_colrange {
        Some(range) if range.is_empty() => (range.start, true, None),
        range => (view.rowcol(insert_at).1, false, range),
    };

    let Some(inference) = infer_scopes(view, run.tested_line, col, single_column, merge) else {
        tracing::debug!(col, "assertion column lies past the tested line");
        return None;
    };

    let suggestion = Suggestion {
        character,
        length: inference.length,
        scope: inference.scope_text(),
        suffix,
    };
    tracing::trace!(?suggestion, candidates = ?inference.candidates, "suggesting assertion");

    view.erase(typed);
    view.insert(insert_at, &suggestion.text());
    let tail_start = insert_at + suggestion.length;
    view.set_selection(Region::new(
        tail_start,
        tail_start + suggestion.tail().chars().count(),
    ));
    Some(suggestion)
}
