//! Line-Context Walker
//!
//! Starting from the cursor line, walks upwards collecting the contiguous run
//! of assertion lines that describe one tested code line.
//!
//! The walk stops at the first line that is neither an assertion line nor,
//! on the very first step only, a comment line still being typed. That line
//! is the tested line. Reaching the top of the document also stops the walk,
//! in which case the last examined line is reported as the tested line.

use crate::syntest::classifier::{assertion_line_details, is_syntax_test_file, AssertionLineDetails};
use crate::syntest::host::{Region, TextView};

/// Assertion lines above one tested line, nearest to the cursor first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssertionRun {
    pub lines: Vec<AssertionLineDetails>,
    pub tested_line: Region,
}

impl AssertionRun {
    /// The assertion line the cursor is on, if the cursor is on one.
    pub fn nearest(&self) -> Option<&AssertionLineDetails> {
        self.lines.first()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Collect the assertion run for the line containing `cursor`.
///
/// Returns `None` for documents that are not syntax test files.
pub fn collect_assertion_run<V: TextView + ?Sized>(
    view: &V,
    cursor: usize,
) -> Option<AssertionRun> {
    if !is_syntax_test_file(view) {
        return None;
    }

    let mut lines = Vec::new();
    let mut next = Some(cursor);
    let mut tested_line = view.line(cursor);
    let mut first_line = true;

    while let Some(pos) = next {
        let details = assertion_line_details(view, pos)?;
        tested_line = details.line_region;
        next = details.line_region.start.checked_sub(1);

        if details.colrange().is_some() || (first_line && details.is_comment_line()) {
            lines.push(details);
        } else {
            break;
        }
        first_line = false;
    }

    tracing::trace!(
        assertion_lines = lines.len(),
        tested_line = ?tested_line,
        "collected assertion run"
    );
    Some(AssertionRun { lines, tested_line })
}
