//! Align command: pad the cursor to the end of the assertion above it, then suggest.

use crate::syntest::classifier::assertion_line_details;
use crate::syntest::host::{EditView, ScopeSource};
use crate::syntest::suggest::{suggest_syntax_test, Suggestion, DEFAULT_CHARACTER};

/// Insert enough spaces to put the cursor right after the last assertion
/// column of the previous line, then run the suggestion command.
///
/// Does nothing unless the cursor is on a comment line of a syntax test file.
pub fn align_syntax_test<V>(view: &mut V) -> Option<Suggestion>
where
    V: EditView + ScopeSource + ?Sized,
{
    let cursor = view.selection();
    let Some(details) = assertion_line_details(view, cursor.start) else {
        tracing::debug!("not a syntax test file, nothing to align");
        return None;
    };
    if !details.is_comment_line() {
        tracing::debug!("cursor is not on a comment line, nothing to align");
        return None;
    }

    let target = details
        .line_region
        .start
        .checked_sub(1)
        .and_then(|above| assertion_line_details(view, above))
        .and_then(|above| above.colrange());
    match target {
        Some(colrange) => {
            let column = view.rowcol(cursor.start).1;
            let padding = colrange.end.saturating_sub(column);
            if padding > 0 {
                view.insert(cursor.end, &" ".repeat(padding));
            }
        }
        None => tracing::debug!("no assertion above the cursor to align with"),
    }

    suggest_syntax_test(view, DEFAULT_CHARACTER)
}
