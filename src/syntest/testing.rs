//! Testing utilities
//!
//! [`MemoryView`] is a complete in-memory host: a text buffer with a primary
//! selection, a per-character scope map, selector scoring, and a record of
//! the highlight regions drawn into it.
//!
//! Scope maps are set up per line and column, the way a syntax test reads:
//!
//! ```rust-example
//! let view = MemoryView::new("source.example", "# SYNTAX TEST \"x\"\nfoo.bar\n# ")
//!     .with_scope(1, 0..3, "source.example variable.other.example")
//!     .with_scope(1, 3..4, "source.example punctuation.accessor.example")
//!     .with_cursor_at(2, 2);
//! ```
//!
//! Every position starts out with the base scope. Inserted text takes the base
//! scope too, and edits keep the scope map aligned with the text, so scopes
//! set on a tested line stay put while the assertion lines below it change.

use crate::syntest::highlight::StyleFlags;
use crate::syntest::host::{EditView, Region, RegionPainter, ScopeSource, TextView};
use crate::syntest::selector::score_selector;
use std::collections::HashMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// A highlight drawn through [`RegionPainter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintedRegions {
    pub regions: Vec<Region>,
    pub scope: String,
    pub flags: StyleFlags,
}

#[derive(Debug, Clone)]
pub struct MemoryView {
    text: Vec<char>,
    scopes: Vec<String>,
    base_scope: String,
    file_name: Option<PathBuf>,
    selection: Region,
    painted: HashMap<String, PaintedRegions>,
}

impl MemoryView {
    /// An unnamed buffer holding `text`, scoped `base_scope` throughout.
    pub fn new(base_scope: &str, text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        Self {
            scopes: vec![base_scope.to_string(); text.len()],
            text,
            base_scope: base_scope.to_string(),
            file_name: None,
            selection: Region::point(0),
            painted: HashMap::new(),
        }
    }

    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    /// Assign the full scope stack `scope` to `cols` of line `row`.
    pub fn with_scope(mut self, row: usize, cols: Range<usize>, scope: &str) -> Self {
        let start = self.point(row, 0);
        for pos in cols.start + start..cols.end + start {
            if let Some(slot) = self.scopes.get_mut(pos) {
                *slot = scope.to_string();
            }
        }
        self
    }

    pub fn with_cursor(mut self, pos: usize) -> Self {
        self.selection = Region::point(pos);
        self
    }

    pub fn with_cursor_at(self, row: usize, col: usize) -> Self {
        let pos = self.point(row, col);
        self.with_cursor(pos)
    }

    pub fn with_selection(mut self, region: Region) -> Self {
        self.selection = region;
        self
    }

    /// Absolute position of `(row, col)`.
    ///
    /// Panics when `row` does not exist, which is always a broken test setup.
    pub fn point(&self, row: usize, col: usize) -> usize {
        let mut line_start = 0;
        for _ in 0..row {
            let newline = self.text[line_start..]
                .iter()
                .position(|&c| c == '\n')
                .unwrap_or_else(|| panic!("row {row} is past the end of the buffer"));
            line_start += newline + 1;
        }
        line_start + col
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Text of line `row`, without its newline.
    pub fn line_text(&self, row: usize) -> String {
        let line = self.line(self.point(row, 0));
        self.substr(line)
    }

    pub fn painted(&self, key: &str) -> Option<&PaintedRegions> {
        self.painted.get(key)
    }

    fn shift_insert(pos: usize, at: usize, len: usize) -> usize {
        if pos >= at {
            pos + len
        } else {
            pos
        }
    }

    fn shift_erase(pos: usize, region: Region) -> usize {
        if pos >= region.end {
            pos - region.len()
        } else if pos > region.start {
            region.start
        } else {
            pos
        }
    }
}

impl TextView for MemoryView {
    fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    fn line(&self, pos: usize) -> Region {
        let pos = pos.min(self.text.len());
        let start = self.text[..pos]
            .iter()
            .rposition(|&c| c == '\n')
            .map(|newline| newline + 1)
            .unwrap_or(0);
        let end = self.text[pos..]
            .iter()
            .position(|&c| c == '\n')
            .map(|offset| pos + offset)
            .unwrap_or(self.text.len());
        Region::new(start, end)
    }

    fn substr(&self, region: Region) -> String {
        let end = region.end.min(self.text.len());
        let start = region.start.min(end);
        self.text[start..end].iter().collect()
    }

    fn rowcol(&self, pos: usize) -> (usize, usize) {
        let pos = pos.min(self.text.len());
        let row = self.text[..pos].iter().filter(|&&c| c == '\n').count();
        (row, pos - self.line(pos).start)
    }

    fn selection(&self) -> Region {
        self.selection
    }
}

impl EditView for MemoryView {
    fn insert(&mut self, pos: usize, text: &str) {
        let pos = pos.min(self.text.len());
        let inserted: Vec<char> = text.chars().collect();
        let len = inserted.len();
        self.text.splice(pos..pos, inserted);
        self.scopes
            .splice(pos..pos, std::iter::repeat(self.base_scope.clone()).take(len));
        self.selection = Region::new(
            Self::shift_insert(self.selection.start, pos, len),
            Self::shift_insert(self.selection.end, pos, len),
        );
    }

    fn erase(&mut self, region: Region) {
        let end = region.end.min(self.text.len());
        let region = Region::new(region.start.min(end), end);
        self.text.drain(region.start..region.end);
        self.scopes.drain(region.start..region.end);
        self.selection = Region::new(
            Self::shift_erase(self.selection.start, region),
            Self::shift_erase(self.selection.end, region),
        );
    }

    fn set_selection(&mut self, region: Region) {
        self.selection = region;
    }
}

impl ScopeSource for MemoryView {
    fn scope_name(&self, pos: usize) -> String {
        self.scopes
            .get(pos)
            .cloned()
            .unwrap_or_else(|| self.base_scope.clone())
    }

    fn score_selector(&self, scope_name: &str, selector: &str) -> u32 {
        score_selector(scope_name, selector)
    }
}

impl RegionPainter for MemoryView {
    fn add_regions(&mut self, key: &str, regions: &[Region], scope: &str, flags: StyleFlags) {
        self.painted.insert(
            key.to_string(),
            PaintedRegions {
                regions: regions.to_vec(),
                scope: scope.to_string(),
                flags,
            },
        );
    }

    fn erase_regions(&mut self, key: &str) {
        self.painted.remove(key);
    }
}
